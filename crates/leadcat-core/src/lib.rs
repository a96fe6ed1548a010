pub mod config;
pub mod error;
pub mod logging;

// Classification pipeline, leaf first.
pub mod url_model;
pub mod journey;
pub mod mapping;
pub mod priority;
pub mod classify;

pub mod dataset;

pub use classify::{classify, Classifier};
pub use dataset::{Dataset, LabeledDataset};
pub use error::{DataError, Result};
pub use mapping::{CategoryMap, DuplicatePolicy, MappingRule};
pub use priority::PriorityList;

//! CLI command handlers. Each command is in its own file.

mod categories;
mod check_mapping;
mod classify;
mod common;
mod completions;
mod summary;

pub use categories::run_categories;
pub use check_mapping::run_check_mapping;
pub use classify::{run_classify, ClassifyOptions};
pub use completions::{run_completions, run_man};
pub use summary::run_summary;

//! Batch classification of lead journeys.
//!
//! Per record: parse the journey into tokens, normalize each token, collect the
//! categories of every mapping pattern the tokens contain, then let the
//! priority list pick one. The matched set starts empty for every record.

use std::collections::BTreeSet;

use crate::dataset::{Dataset, LabeledDataset};
use crate::error::Result;
use crate::journey;
use crate::mapping::CategoryMap;
use crate::priority::PriorityList;
use crate::url_model;

/// Immutable configuration for one classification run.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    map: CategoryMap,
    priority: PriorityList,
}

impl Classifier {
    pub fn new(map: CategoryMap, priority: PriorityList) -> Self {
        Self { map, priority }
    }

    pub fn map(&self) -> &CategoryMap {
        &self.map
    }

    pub fn priority(&self) -> &PriorityList {
        &self.priority
    }

    /// Every category matched by any token of `raw_journey`.
    pub fn matched_categories(&self, raw_journey: &str) -> BTreeSet<&str> {
        matched_in(&self.map, raw_journey)
    }

    /// The single category for one journey field. Never fails; journeys
    /// without tokens or matches get the fallback.
    pub fn classify_journey(&self, raw_journey: &str) -> &str {
        self.priority.resolve(&self.matched_categories(raw_journey))
    }

    /// One category per journey, in input order.
    pub fn classify_journeys<'a, I>(&self, journeys: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        journeys
            .into_iter()
            .map(|j| self.classify_journey(j).to_string())
            .collect()
    }

    /// One category per dataset row. Fails only if `journey_column` is not in
    /// the header; the dataset itself is left untouched.
    pub fn classify_dataset(&self, dataset: &Dataset, journey_column: &str) -> Result<Vec<String>> {
        let idx = dataset.require_column(journey_column)?;
        let labels = self.classify_journeys(dataset.column_values(idx));
        tracing::debug!(
            rows = labels.len(),
            patterns = self.map.len(),
            "classified dataset"
        );
        Ok(labels)
    }

    /// Classifies `dataset` and attaches the labels as `output_column`.
    pub fn label_dataset(
        &self,
        dataset: Dataset,
        journey_column: &str,
        output_column: &str,
    ) -> Result<LabeledDataset> {
        let labels = self.classify_dataset(&dataset, journey_column)?;
        LabeledDataset::new(dataset, output_column, labels)
    }
}

/// One category per record of `dataset`, same order.
pub fn classify(
    dataset: &Dataset,
    priority: &PriorityList,
    map: &CategoryMap,
    journey_column: &str,
) -> Result<Vec<String>> {
    let idx = dataset.require_column(journey_column)?;
    Ok(dataset
        .column_values(idx)
        .map(|raw| priority.resolve(&matched_in(map, raw)).to_string())
        .collect())
}

/// Categories of `map` hit by any token of one raw journey field.
fn matched_in<'m>(map: &'m CategoryMap, raw_journey: &str) -> BTreeSet<&'m str> {
    let mut matched = BTreeSet::new();
    for token in journey::parse(raw_journey) {
        map.collect_matches(&url_model::normalize(&token), &mut matched);
    }
    matched
}

//! Loading shared by the commands that classify.

use anyhow::{Context, Result};
use leadcat_core::config::LeadcatConfig;
use leadcat_core::mapping::{self, CategoryMap};
use leadcat_core::{Classifier, Dataset, LabeledDataset};
use std::path::Path;

/// Reads the mapping table from `mapping` or the configured path.
pub fn load_mapping(cfg: &LeadcatConfig, mapping: Option<&Path>) -> Result<CategoryMap> {
    let path = mapping.unwrap_or(cfg.mapping_path.as_path());
    mapping::load_mapping_path(path, cfg.duplicate_patterns)
        .with_context(|| format!("load mapping: {}", path.display()))
}

pub fn load_classifier(cfg: &LeadcatConfig, mapping: Option<&Path>) -> Result<Classifier> {
    let map = load_mapping(cfg, mapping)?;
    if map.is_empty() {
        tracing::warn!("mapping has no patterns; every lead will be {}", cfg.fallback);
    }
    Ok(Classifier::new(map, cfg.priority_list()))
}

/// Loads the leads and mapping and classifies every lead.
pub fn classify_file(
    cfg: &LeadcatConfig,
    leads: &Path,
    mapping: Option<&Path>,
    journey_column: Option<&str>,
) -> Result<(Classifier, LabeledDataset)> {
    let classifier = load_classifier(cfg, mapping)?;
    let dataset = Dataset::from_path(leads)
        .with_context(|| format!("load lead data: {}", leads.display()))?;
    let journey_column = journey_column.unwrap_or(cfg.journey_column.as_str());
    let labeled = classifier
        .label_dataset(dataset, journey_column, &cfg.output_column)
        .with_context(|| format!("classify {}", leads.display()))?;
    Ok((classifier, labeled))
}

//! Read the mapping table (CSV with `URL` and `TYPE` columns).

use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::{CategoryMap, DuplicatePolicy, MappingRule};
use crate::error::{DataError, Result};

/// Header of the pattern column.
pub const PATTERN_COLUMN: &str = "URL";
/// Header of the category column.
pub const CATEGORY_COLUMN: &str = "TYPE";

/// Loads a mapping table from a CSV file.
pub fn load_mapping_path(path: &Path, policy: DuplicatePolicy) -> Result<CategoryMap> {
    let file = File::open(path)?;
    let map = load_mapping(file, policy)?;
    tracing::debug!(
        path = %path.display(),
        patterns = map.len(),
        "loaded mapping"
    );
    Ok(map)
}

/// Loads a mapping table from CSV text. Extra columns are ignored; rows with
/// a blank pattern or category are skipped.
pub fn load_mapping<R: Read>(reader: R, policy: DuplicatePolicy) -> Result<CategoryMap> {
    let mut reader = ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let pattern_idx = column_index(&headers, PATTERN_COLUMN)?;
    let category_idx = column_index(&headers, CATEGORY_COLUMN)?;

    let mut map = CategoryMap::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let pattern = record.get(pattern_idx).unwrap_or("");
        let category = record.get(category_idx).unwrap_or("");
        match MappingRule::new(pattern, category) {
            Some(rule) => map.insert(rule, policy)?,
            // Header is line 1.
            None => tracing::warn!(line = i + 2, "skipping mapping row with blank URL or TYPE"),
        }
    }
    Ok(map)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| DataError::MissingColumn {
            table: "mapping",
            column: name.to_string(),
        })
}

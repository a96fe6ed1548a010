//! Error type for loading tables and applying configuration to them.
//!
//! The classification functions themselves never fail; everything here is a
//! configuration problem detected before or after a run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    /// A required column is absent from a table header.
    #[error("{table} is missing required column '{column}'")]
    MissingColumn { table: &'static str, column: String },

    /// The CSV reader or writer failed (bad quoting, I/O underneath, ...).
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// Two mapping rows share a pattern (after lower-casing) and the
    /// duplicate policy is `reject`.
    #[error("duplicate mapping pattern '{pattern}' (categories '{first}' and '{second}')")]
    DuplicatePattern {
        pattern: String,
        first: String,
        second: String,
    },

    /// A manual label is not part of the priority vocabulary.
    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("row {row} out of range (dataset has {len} rows)")]
    RowOutOfRange { row: usize, len: usize },

    /// A data row has more cells than the header has columns.
    #[error("row {row} has {cells} cells but the header has {columns} columns")]
    RowTooWide {
        row: usize,
        cells: usize,
        columns: usize,
    },

    #[error("{labels} labels for {rows} rows")]
    LabelCountMismatch { labels: usize, rows: usize },

    /// A `ROW=LABEL` override could not be parsed.
    #[error("invalid override '{0}': expected ROW=LABEL")]
    InvalidOverride(String),
}

pub type Result<T> = std::result::Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_column_message_names_table_and_column() {
        let e = DataError::MissingColumn {
            table: "mapping",
            column: "TYPE".to_string(),
        };
        assert_eq!(e.to_string(), "mapping is missing required column 'TYPE'");
    }

    #[test]
    fn row_out_of_range_message() {
        let e = DataError::RowOutOfRange { row: 7, len: 3 };
        assert_eq!(e.to_string(), "row 7 out of range (dataset has 3 rows)");
    }
}

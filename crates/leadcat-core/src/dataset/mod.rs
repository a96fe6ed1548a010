//! Lead data tables: read a CSV, attach one category per row, write it back.
//!
//! Cells are kept as the exact strings read from the file so that every
//! column other than the category round-trips unchanged.

mod labeled;

pub use labeled::{CategoryCount, LabeledDataset, Override, Summary};

use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{DataError, Result};

/// Default header of the journey column.
pub const DEFAULT_JOURNEY_COLUMN: &str = "journey";
/// Default header of the category column added on output.
pub const DEFAULT_OUTPUT_COLUMN: &str = "TYPE";

/// Rows of string cells under a header. Every row has exactly one cell per
/// header column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row, padding a short row with empty cells. A row wider than
    /// the header is rejected so no cell is lost on output.
    pub fn push_row<I, S>(&mut self, cells: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let width = self.headers.len();
        let mut row: Vec<String> = cells.into_iter().map(Into::into).collect();
        if row.len() > width {
            return Err(DataError::RowTooWide {
                row: self.rows.len(),
                cells: row.len(),
                columns: width,
            });
        }
        row.resize(width, String::new());
        self.rows.push(row);
        Ok(())
    }

    /// Reads a CSV file whose first line is the header.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let dataset = Self::from_reader(file)?;
        tracing::debug!(
            path = %path.display(),
            rows = dataset.len(),
            columns = dataset.headers.len(),
            "loaded lead data"
        );
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .flexible(true)
            .from_reader(reader);
        let mut dataset = Self::new(reader.headers()?.iter());
        for record in reader.records() {
            dataset.push_row(record?.iter())?;
        }
        Ok(dataset)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first column named `name` (exact match).
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column(name).ok_or_else(|| DataError::MissingColumn {
            table: "lead data",
            column: name.to_string(),
        })
    }

    /// Cells of column `idx`, top to bottom.
    pub fn column_values(&self, idx: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().map(move |row| row[idx].as_str())
    }

    /// Removes every column named `name`, returning how many were removed.
    pub(crate) fn drop_column(&mut self, name: &str) -> usize {
        let keep: Vec<bool> = self.headers.iter().map(|h| h != name).collect();
        let removed = keep.iter().filter(|k| !**k).count();
        if removed == 0 {
            return 0;
        }
        self.headers = retain_by_mask(std::mem::take(&mut self.headers), &keep);
        for row in &mut self.rows {
            *row = retain_by_mask(std::mem::take(row), &keep);
        }
        removed
    }
}

fn retain_by_mask(cells: Vec<String>, keep: &[bool]) -> Vec<String> {
    cells
        .into_iter()
        .zip(keep)
        .filter(|(_, k)| **k)
        .map(|(c, _)| c)
        .collect()
}

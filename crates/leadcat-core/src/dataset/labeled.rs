//! A dataset with one category per row, presented category-first.

use csv::Writer;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use super::Dataset;
use crate::error::{DataError, Result};
use crate::priority::PriorityList;

/// Lead data plus a category column that is written as the first column.
///
/// Any column of the input that already had the category column's name is
/// replaced rather than duplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledDataset {
    column: String,
    labels: Vec<String>,
    data: Dataset,
}

impl LabeledDataset {
    pub fn new(mut data: Dataset, column: impl Into<String>, labels: Vec<String>) -> Result<Self> {
        if labels.len() != data.len() {
            return Err(DataError::LabelCountMismatch {
                labels: labels.len(),
                rows: data.len(),
            });
        }
        let column = column.into();
        if data.drop_column(&column) > 0 {
            tracing::debug!(column = %column, "replacing existing category column");
        }
        Ok(Self {
            column,
            labels,
            data,
        })
    }

    /// Output header: the category column, then the remaining input columns.
    pub fn headers(&self) -> Vec<&str> {
        std::iter::once(self.column.as_str())
            .chain(self.data.headers().iter().map(String::as_str))
            .collect()
    }

    /// One output row: its category, then the remaining input cells.
    pub fn row(&self, idx: usize) -> Option<Vec<&str>> {
        let label = self.labels.get(idx)?;
        let cells = self.data.rows().get(idx)?;
        Some(
            std::iter::once(label.as_str())
                .chain(cells.iter().map(String::as_str))
                .collect(),
        )
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Overrides the category of one row. The label must be in `vocabulary`.
    pub fn relabel(&mut self, row: usize, label: &str, vocabulary: &PriorityList) -> Result<()> {
        if !vocabulary.contains(label) {
            return Err(DataError::UnknownCategory(label.to_string()));
        }
        let len = self.labels.len();
        let slot = self
            .labels
            .get_mut(row)
            .ok_or(DataError::RowOutOfRange { row, len })?;
        tracing::info!(row, from = %slot, to = %label, "manual relabel");
        *slot = label.to_string();
        Ok(())
    }

    pub fn apply_override(&mut self, o: &Override, vocabulary: &PriorityList) -> Result<()> {
        self.relabel(o.row, &o.label, vocabulary)
    }

    /// Rows whose category is `label`, in their original order.
    pub fn filtered(&self, label: &str) -> LabeledDataset {
        let mut data = Dataset::new(self.data.headers().iter().map(String::as_str));
        let mut labels = Vec::new();
        for (l, cells) in self.labels.iter().zip(self.data.rows()) {
            if l == label {
                data.rows.push(cells.clone());
                labels.push(l.clone());
            }
        }
        LabeledDataset {
            column: self.column.clone(),
            labels,
            data,
        }
    }

    /// Row count per category, ordered by category.
    pub fn summary(&self) -> Summary {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for label in &self.labels {
            *counts.entry(label.as_str()).or_default() += 1;
        }
        Summary {
            total: self.labels.len(),
            categories: counts
                .into_iter()
                .map(|(category, count)| CategoryCount {
                    category: category.to_string(),
                    count,
                })
                .collect(),
        }
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut w = Writer::from_writer(writer);
        w.write_record(self.headers())?;
        for idx in 0..self.len() {
            if let Some(row) = self.row(idx) {
                w.write_record(row)?;
            }
        }
        w.flush()?;
        Ok(())
    }

    pub fn write_path(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        self.write_csv(file)?;
        tracing::info!(path = %path.display(), rows = self.len(), "wrote categorized leads");
        Ok(())
    }
}

/// Category counts for a labeled dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub categories: Vec<CategoryCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// A manual `ROW=LABEL` correction; `ROW` is the 0-based data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    pub row: usize,
    pub label: String,
}

impl FromStr for Override {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || DataError::InvalidOverride(s.to_string());
        let (row, label) = s.split_once('=').ok_or_else(invalid)?;
        let row = row.trim().parse::<usize>().map_err(|_| invalid())?;
        let label = label.trim();
        if label.is_empty() {
            return Err(invalid());
        }
        Ok(Self {
            row,
            label: label.to_string(),
        })
    }
}

//! Pattern → category lookup.
//!
//! A mapping row pairs a URL fragment with a category label. Fragments match
//! anywhere in a normalized journey path, case-insensitively; this is plain
//! substring containment, not prefix or segment matching.

mod load;

pub use load::{load_mapping, load_mapping_path, PATTERN_COLUMN, CATEGORY_COLUMN};

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::{DataError, Result};
use crate::priority::PriorityList;

/// What to do when two mapping rows share a pattern (after lower-casing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Later rows replace earlier ones; each replacement is logged.
    #[default]
    Overwrite,
    /// Conflicting rows are a configuration error.
    Reject,
}

/// One mapping row. The pattern is stored lower-cased and is never blank.
/// Surrounding whitespace is kept: it is part of what the pattern matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingRule {
    pattern: String,
    category: String,
}

impl MappingRule {
    /// Returns `None` when the pattern or the category is blank.
    pub fn new(pattern: &str, category: &str) -> Option<Self> {
        if pattern.trim().is_empty() || category.trim().is_empty() {
            return None;
        }
        Some(Self {
            pattern: pattern.to_lowercase(),
            category: category.to_string(),
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

/// A pattern whose category was replaced by a later row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverwrittenPattern {
    pub pattern: String,
    pub previous: String,
    pub current: String,
}

/// Lower-cased pattern → category, built once per run.
#[derive(Debug, Clone, Default)]
pub struct CategoryMap {
    entries: BTreeMap<String, String>,
    overwritten: Vec<OverwrittenPattern>,
}

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from rules in source order.
    pub fn from_rules<I>(rules: I, policy: DuplicatePolicy) -> Result<Self>
    where
        I: IntoIterator<Item = MappingRule>,
    {
        let mut map = Self::new();
        for rule in rules {
            map.insert(rule, policy)?;
        }
        Ok(map)
    }

    /// Adds one rule. Re-adding a pattern with the same category is a no-op.
    pub fn insert(&mut self, rule: MappingRule, policy: DuplicatePolicy) -> Result<()> {
        let MappingRule { pattern, category } = rule;
        let previous = self.entries.get(&pattern).cloned();
        match previous {
            Some(previous) if previous == category => {
                tracing::debug!(pattern = %pattern, "duplicate mapping row ignored");
            }
            Some(previous) => {
                if policy == DuplicatePolicy::Reject {
                    return Err(DataError::DuplicatePattern {
                        pattern,
                        first: previous,
                        second: category,
                    });
                }
                tracing::warn!(
                    pattern = %pattern,
                    previous = %previous,
                    current = %category,
                    "mapping pattern overwritten by a later row"
                );
                self.overwritten.push(OverwrittenPattern {
                    pattern: pattern.clone(),
                    previous,
                    current: category.clone(),
                });
                self.entries.insert(pattern, category);
            }
            None => {
                self.entries.insert(pattern, category);
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Category for an exact pattern (any case).
    pub fn get(&self, pattern: &str) -> Option<&str> {
        self.entries
            .get(&pattern.to_lowercase())
            .map(String::as_str)
    }

    /// `(pattern, category)` pairs in pattern order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(p, c)| (p.as_str(), c.as_str()))
    }

    /// Every category that some pattern maps to.
    pub fn categories(&self) -> BTreeSet<&str> {
        self.entries.values().map(String::as_str).collect()
    }

    /// Patterns replaced while building this map.
    pub fn overwritten(&self) -> &[OverwrittenPattern] {
        &self.overwritten
    }

    /// Categories of all patterns contained in `normalized`.
    ///
    /// Several patterns may hit one URL; categories are deduplicated.
    pub fn matches(&self, normalized: &str) -> BTreeSet<&str> {
        let haystack = normalized.to_lowercase();
        self.entries
            .iter()
            .filter(|(pattern, _)| haystack.contains(pattern.as_str()))
            .map(|(_, category)| category.as_str())
            .collect()
    }

    /// Adds the categories matched by `normalized` into `into`.
    pub fn collect_matches<'a>(&'a self, normalized: &str, into: &mut BTreeSet<&'a str>) {
        into.extend(self.matches(normalized));
    }

    /// Cross-checks the mapping against a priority list.
    pub fn check(&self, priority: &PriorityList) -> MappingReport {
        let unreachable = self
            .categories()
            .into_iter()
            .filter(|c| !priority.contains(c))
            .map(str::to_string)
            .collect();
        MappingReport {
            patterns: self.len(),
            categories: self.categories().len(),
            unreachable,
            overwritten: self.overwritten.clone(),
        }
    }
}

/// Result of [`CategoryMap::check`].
#[derive(Debug, Clone)]
pub struct MappingReport {
    pub patterns: usize,
    pub categories: usize,
    /// Categories the mapping produces that the priority list never selects.
    pub unreachable: Vec<String>,
    pub overwritten: Vec<OverwrittenPattern>,
}

impl MappingReport {
    pub fn is_clean(&self) -> bool {
        self.unreachable.is_empty() && self.overwritten.is_empty()
    }
}

//! Priority-ordered category vocabulary and resolution of matched sets.

use std::collections::BTreeSet;

/// Catch-all category for leads nothing else matched.
pub const FALLBACK_CATEGORY: &str = "GENERAL";

/// Built-in vocabulary, highest priority first.
pub const DEFAULT_PRIORITY: &[&str] = &[
    "Neighborhood: Downtown Fort Lauderdale",
    "Neighborhood: Las Olas Isles",
    "Neighborhood: Bermuda Riviera",
    "Neighborhood: Lauderdale Harbours",
    "Neighborhood: Fort Lauderdale Beach",
    "Neighborhood: Coral Ridge",
    "Neighborhood: Rio Vista",
    "Neighborhood: Victoria Park",
    "Neighborhood: Tarpon River",
    "Neighborhood: Lake Ridge",
    "Condo: NuRiver Landing Condo",
    "Condo: Watergarden",
    "Condo: Symphony",
    "Condo: Las Olas Grand",
    "Condo: 100 Las Olas",
    "Condo: Las Olas By The River",
    "Condo: Las Olas River House",
    "Condo: Strada",
    "Condo: Waverly",
    "Condo: NuRiver Landing",
    "New Construction",
    "Waterfront Homes",
    "High Rise Riverfront Condos",
    "other",
    "BUY",
    "SELL",
    FALLBACK_CATEGORY,
];

/// Ordered category labels plus the fallback every lead can reach.
///
/// The fallback is always a member of the list, so every resolved label is
/// part of the vocabulary. Labels are opaque strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityList {
    labels: Vec<String>,
    fallback: String,
}

impl PriorityList {
    /// Builds a list from labels in priority order. Repeated labels keep their
    /// first position; the fallback is appended if not already listed.
    pub fn new<I, S>(labels: I, fallback: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fallback = fallback.into();
        let mut out: Vec<String> = Vec::new();
        for label in labels {
            let label = label.into();
            if !out.contains(&label) {
                out.push(label);
            }
        }
        if !out.contains(&fallback) {
            out.push(fallback.clone());
        }
        Self {
            labels: out,
            fallback,
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Picks one category from `matched`.
    ///
    /// Walks the priority list in order and returns the first label present in
    /// `matched`; the order in which categories were matched never matters.
    /// Returns the fallback when nothing in the list was matched.
    pub fn resolve(&self, matched: &BTreeSet<&str>) -> &str {
        self.labels
            .iter()
            .map(String::as_str)
            .find(|label| matched.contains(*label))
            .unwrap_or(self.fallback.as_str())
    }
}

impl Default for PriorityList {
    fn default() -> Self {
        Self::new(DEFAULT_PRIORITY.iter().copied(), FALLBACK_CATEGORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set<'a>(items: &[&'a str]) -> BTreeSet<&'a str> {
        items.iter().copied().collect()
    }

    #[test]
    fn first_label_in_priority_order_wins() {
        let p = PriorityList::new(["Condo: X", "BUY", "GENERAL"], "GENERAL");
        assert_eq!(p.resolve(&set(&["BUY", "Condo: X"])), "Condo: X");
        assert_eq!(p.resolve(&set(&["BUY"])), "BUY");
    }

    #[test]
    fn empty_or_unlisted_matches_fall_back() {
        let p = PriorityList::new(["Condo: X"], "GENERAL");
        assert_eq!(p.resolve(&set(&[])), "GENERAL");
        assert_eq!(p.resolve(&set(&["Not Listed"])), "GENERAL");
    }

    #[test]
    fn fallback_is_always_a_member() {
        let p = PriorityList::new(["A", "B"], "GENERAL");
        assert_eq!(p.labels().last().map(String::as_str), Some("GENERAL"));
        assert!(p.contains("GENERAL"));

        let listed = PriorityList::new(["A", "GENERAL", "B"], "GENERAL");
        assert_eq!(listed.len(), 3);
        assert_eq!(listed.labels()[1], "GENERAL");
    }

    #[test]
    fn fallback_listed_early_still_ranks_by_position() {
        // A fallback placed mid-list outranks the labels after it.
        let p = PriorityList::new(["A", "GENERAL", "B"], "GENERAL");
        assert_eq!(p.resolve(&set(&["B", "GENERAL"])), "GENERAL");
        assert_eq!(p.resolve(&set(&["B"])), "B");
    }

    #[test]
    fn repeated_labels_keep_first_position() {
        let p = PriorityList::new(["A", "B", "A"], "GENERAL");
        assert_eq!(p.labels(), &["A", "B", "GENERAL"]);
    }

    #[test]
    fn default_vocabulary() {
        let p = PriorityList::default();
        assert_eq!(p.len(), DEFAULT_PRIORITY.len());
        assert_eq!(p.fallback(), "GENERAL");
        assert_eq!(p.labels()[0], "Neighborhood: Downtown Fort Lauderdale");
        assert!(p.contains("Condo: Strada"));
    }
}

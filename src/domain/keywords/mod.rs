//! Keyword dataset lookup.
//!
//! A static table of (industry, keywords) rows loaded once at startup.
//! Resolution is a pure function of the table: case-insensitive exact match
//! on the industry column, matching rows joined in dataset order.

use serde::{Deserialize, Serialize};

/// One dataset row: an industry name and its comma-separated keyword list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRow {
    pub industry: String,
    pub keywords: String,
}

impl KeywordRow {
    pub fn new(industry: impl Into<String>, keywords: impl Into<String>) -> Self {
        Self {
            industry: industry.into(),
            keywords: keywords.into(),
        }
    }
}

/// Immutable keyword lookup table, shared read-only across all sessions.
#[derive(Debug, Clone, Default)]
pub struct KeywordTable {
    rows: Vec<KeywordRow>,
}

impl KeywordTable {
    /// Fixed sentinel returned when no row matches the queried industry.
    pub const NO_MATCH: &'static str = "No predefined keywords found.";

    /// Builds a table from dataset rows, preserving their order.
    pub fn new(rows: Vec<KeywordRow>) -> Self {
        Self { rows }
    }

    /// Number of dataset rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the keyword suggestion for an industry.
    ///
    /// Matches the industry column case-insensitively and exactly (not by
    /// substring). All matching rows contribute, joined with `", "` in row
    /// order. No match yields [`KeywordTable::NO_MATCH`], never a bare
    /// empty string.
    pub fn resolve(&self, industry: &str) -> String {
        let needle = industry.to_lowercase();
        let matches: Vec<&str> = self
            .rows
            .iter()
            .filter(|row| row.industry.to_lowercase() == needle)
            .map(|row| row.keywords.as_str())
            .collect();

        if matches.is_empty() {
            Self::NO_MATCH.to_string()
        } else {
            matches.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> KeywordTable {
        KeywordTable::new(vec![
            KeywordRow::new("Retail", "online store, buy now, discounts"),
            KeywordRow::new("Bakery", "fresh bread, local bakery"),
            KeywordRow::new("retail", "retail POS, shop software"),
        ])
    }

    #[test]
    fn resolve_is_case_insensitive() {
        let table = sample_table();
        assert_eq!(table.resolve("Bakery"), table.resolve("bakery"));
        assert_eq!(table.resolve("BAKERY"), "fresh bread, local bakery");
    }

    #[test]
    fn resolve_joins_multiple_matches_in_row_order() {
        let table = sample_table();
        assert_eq!(
            table.resolve("retail"),
            "online store, buy now, discounts, retail POS, shop software"
        );
    }

    #[test]
    fn resolve_requires_exact_match_not_substring() {
        let table = sample_table();
        assert_eq!(table.resolve("Retai"), KeywordTable::NO_MATCH);
        assert_eq!(table.resolve("Retail Stores"), KeywordTable::NO_MATCH);
    }

    #[test]
    fn resolve_unknown_industry_returns_sentinel() {
        let table = sample_table();
        let result = table.resolve("nonexistent-industry-xyz");
        assert_eq!(result, KeywordTable::NO_MATCH);
        assert!(!result.is_empty());
    }

    #[test]
    fn resolve_on_empty_table_returns_sentinel() {
        let table = KeywordTable::default();
        assert_eq!(table.resolve("anything"), KeywordTable::NO_MATCH);
    }

    #[test]
    fn len_reports_row_count() {
        assert_eq!(sample_table().len(), 3);
        assert!(KeywordTable::default().is_empty());
    }
}

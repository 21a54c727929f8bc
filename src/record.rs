//! The analysis record.
//!
//! One immutable record per distinct input value, composed from the text
//! primitives in `metrics.rs` and the content identity in `identity.rs`.
//! The record is never mutated after construction; removal is an external
//! storage concern keyed by `id`.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{identity, metrics};

/// Canonical, content-addressed record of a string's structural properties.
///
/// `id` is a pure function of `value` (see `identity.rs`); two records built
/// from the same value always carry the same id, which is what lets the
/// external store treat creation as idempotent and duplicate-detecting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// Stable content-derived identifier (lowercase hex SHA-256 of `value`).
    pub id: String,
    /// The original string, stored verbatim.
    pub value: String,
    /// Count of Unicode code points in `value`.
    pub length: usize,
    /// Whether the case-folded code-point sequence equals its reverse.
    pub is_palindrome: bool,
    /// Number of maximal whitespace-delimited non-empty runs.
    pub word_count: usize,
    /// Number of distinct code points.
    pub unique_character_count: usize,
    /// Occurrence count per distinct code point.
    pub character_frequency: HashMap<char, usize>,
    /// The distinct code points, materialized for external indexing.
    pub distinct_characters: Vec<char>,
    /// Construction time.
    pub created_at: DateTime<Utc>,
}

impl AnalysisRecord {
    /// Build the record for `value`.
    ///
    /// Pure except for the single wall-clock read behind `created_at`.
    pub(crate) fn build(value: &str) -> Self {
        let (character_frequency, distinct_characters) = metrics::character_frequency(value);

        AnalysisRecord {
            id: identity::content_id(value),
            value: value.to_string(),
            length: metrics::code_point_length(value),
            is_palindrome: metrics::is_palindrome(value),
            word_count: metrics::word_count(value),
            unique_character_count: character_frequency.len(),
            character_frequency,
            distinct_characters,
            created_at: Utc::now(),
        }
    }

    /// Whether `ch` occurs anywhere in the analyzed value.
    pub fn contains_character(&self, ch: char) -> bool {
        self.character_frequency.contains_key(&ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_stable_across_calls() {
        let a = AnalysisRecord::build("kayak");
        let b = AnalysisRecord::build("kayak");
        assert_eq!(a.id, b.id);
        assert_ne!(a.id, AnalysisRecord::build("kayaks").id);
    }

    #[test]
    fn empty_string_record() {
        let record = AnalysisRecord::build("");
        assert_eq!(record.length, 0);
        assert_eq!(record.word_count, 0);
        assert_eq!(record.unique_character_count, 0);
        assert!(record.character_frequency.is_empty());
        assert!(record.distinct_characters.is_empty());
        // The empty sequence reads the same reversed.
        assert!(record.is_palindrome);
    }

    #[test]
    fn emoji_counts_as_one_code_point() {
        let record = AnalysisRecord::build("a\u{1F44D}b");
        assert_eq!(record.length, 3);
        assert_eq!(record.unique_character_count, 3);
    }

    #[test]
    fn value_is_stored_verbatim() {
        let record = AnalysisRecord::build("  Mixed CASE  ");
        assert_eq!(record.value, "  Mixed CASE  ");
    }

    #[test]
    fn frequency_total_equals_length_and_distinct_matches_unique() {
        for value in ["", "abba", "two words", "a\u{1F44D}\u{1F44D}", "åäö åäö"] {
            let record = AnalysisRecord::build(value);
            assert_eq!(record.character_frequency.values().sum::<usize>(), record.length);
            assert_eq!(record.distinct_characters.len(), record.unique_character_count);
        }
    }

    #[test]
    fn contains_character_consults_the_frequency_map() {
        let record = AnalysisRecord::build("abc");
        assert!(record.contains_character('a'));
        assert!(!record.contains_character('z'));
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = AnalysisRecord::build("abba");
        let json = serde_json::to_string(&record).unwrap();
        let back: AnalysisRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}

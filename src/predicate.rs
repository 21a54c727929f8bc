//! Filter compilation.
//!
//! [`compile`] is the single place where a [`ParsedFilter`] becomes a
//! storage predicate. Both entry paths (structured query parameters and
//! interpreted phrases) go through it, so equivalent filters can never
//! diverge in storage behavior.
//!
//! A [`StoragePredicate`] is a pure description: a conjunction of
//! [`Clause`]s in a fixed field order, with no side effects. An external
//! store may translate the clauses to its native index lookups;
//! [`StoragePredicate::matches`] is the reference semantics.

use serde::{Deserialize, Serialize};

use crate::{AnalysisRecord, ParsedFilter};

/// One compiled constraint over an [`AnalysisRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Clause {
    /// Equality on the record's palindrome flag.
    PalindromeIs(bool),
    /// Equality on the record's word count.
    WordCountIs(i64),
    /// `length >= n`.
    LengthAtLeast(i64),
    /// `length <= n`.
    LengthAtMost(i64),
    /// Membership in the record's distinct-character set.
    ContainsCharacter(char),
}

impl Clause {
    fn matches(&self, record: &AnalysisRecord) -> bool {
        match *self {
            Clause::PalindromeIs(wanted) => record.is_palindrome == wanted,
            Clause::WordCountIs(count) => record.word_count as i64 == count,
            Clause::LengthAtLeast(min) => record.length as i64 >= min,
            Clause::LengthAtMost(max) => record.length as i64 <= max,
            Clause::ContainsCharacter(ch) => record.contains_character(ch),
        }
    }
}

/// A conjunction of clauses; the empty predicate matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoragePredicate {
    pub clauses: Vec<Clause>,
}

impl StoragePredicate {
    /// Evaluate the conjunction against one record.
    pub fn matches(&self, record: &AnalysisRecord) -> bool {
        self.clauses.iter().all(|clause| clause.matches(record))
    }
}

/// Translate a filter into its predicate: one clause per present field,
/// absent fields contribute nothing. Clause order follows field order, so
/// equal filters compile to structurally identical predicates.
pub(crate) fn compile(filter: &ParsedFilter) -> StoragePredicate {
    let mut clauses = Vec::new();

    if let Some(wanted) = filter.is_palindrome {
        clauses.push(Clause::PalindromeIs(wanted));
    }
    if let Some(count) = filter.word_count {
        clauses.push(Clause::WordCountIs(count));
    }
    if let Some(min) = filter.min_length {
        clauses.push(Clause::LengthAtLeast(min));
    }
    if let Some(max) = filter.max_length {
        clauses.push(Clause::LengthAtMost(max));
    }
    if let Some(ch) = filter.contains_character {
        clauses.push(Clause::ContainsCharacter(ch));
    }

    StoragePredicate { clauses }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze;

    #[test]
    fn one_clause_per_present_field_in_fixed_order() {
        let filter = ParsedFilter {
            is_palindrome: Some(true),
            word_count: Some(1),
            min_length: Some(3),
            max_length: Some(9),
            contains_character: Some('a'),
        };
        let predicate = compile(&filter);
        assert_eq!(
            predicate.clauses,
            vec![
                Clause::PalindromeIs(true),
                Clause::WordCountIs(1),
                Clause::LengthAtLeast(3),
                Clause::LengthAtMost(9),
                Clause::ContainsCharacter('a'),
            ]
        );
    }

    #[test]
    fn absent_fields_contribute_nothing() {
        let filter = ParsedFilter { min_length: Some(11), ..Default::default() };
        assert_eq!(compile(&filter).clauses, vec![Clause::LengthAtLeast(11)]);
        assert!(compile(&ParsedFilter::default()).clauses.is_empty());
    }

    #[test]
    fn empty_predicate_matches_everything() {
        let predicate = compile(&ParsedFilter::default());
        assert!(predicate.matches(&analyze("anything")));
        assert!(predicate.matches(&analyze("")));
    }

    #[test]
    fn conjunction_requires_every_clause() {
        let filter = ParsedFilter {
            is_palindrome: Some(true),
            word_count: Some(1),
            ..Default::default()
        };
        let predicate = compile(&filter);

        assert!(predicate.matches(&analyze("racecar")));
        // Palindrome but two words.
        assert!(!predicate.matches(&analyze("aba aba")));
        // One word but not a palindrome.
        assert!(!predicate.matches(&analyze("hello")));
    }

    #[test]
    fn length_bounds_form_a_range() {
        let filter = ParsedFilter { min_length: Some(3), max_length: Some(5), ..Default::default() };
        let predicate = compile(&filter);

        assert!(!predicate.matches(&analyze("ab")));
        assert!(predicate.matches(&analyze("abc")));
        assert!(predicate.matches(&analyze("abcde")));
        assert!(!predicate.matches(&analyze("abcdef")));
    }

    #[test]
    fn contains_character_checks_the_distinct_set() {
        let filter = ParsedFilter { contains_character: Some('z'), ..Default::default() };
        let predicate = compile(&filter);

        assert!(predicate.matches(&analyze("puzzle")));
        assert!(!predicate.matches(&analyze("riddle")));
    }

    #[test]
    fn equal_filters_compile_identically_regardless_of_origin() {
        let from_params = ParsedFilter::from_params(Some(true), Some(1), None, None, None);
        let assembled = ParsedFilter { is_palindrome: Some(true), word_count: Some(1), ..Default::default() };
        assert_eq!(compile(&from_params), compile(&assembled));
    }
}

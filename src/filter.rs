//! Structured filters and their consistency rules.
//!
//! A [`ParsedFilter`] is the ephemeral product of either the phrase
//! interpreter or the structured-query path. During interpretation it is
//! accumulated through a [`FilterDraft`], which additionally tracks *how*
//! each field was set:
//!
//! - **provisional**: contributed by a heuristic/shorthand rule; a later,
//!   more specific rule targeting the same field may silently override it.
//! - **explicit**: asserted directly by the phrase; a second explicit
//!   assertion with a different value is a hard [`Error::ParseConflict`].
//!
//! The two masks are `bitflags` sets, one bit per filter field.
//!
//! Whole-object checks live in [`validate`]: field accumulation only raises
//! the narrow same-field conflicts above, while `validate` runs once over
//! the finished filter (infeasible length ranges today; further cross-field
//! checks slot in behind the same contract).

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Error;

bitflags::bitflags! {
    /// One bit per filter field; used for the explicit/provisional masks.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub(crate) struct FieldSet: u8 {
        const PALINDROME    = 1 << 0;
        const WORD_COUNT    = 1 << 1;
        const MIN_LENGTH    = 1 << 2;
        const MAX_LENGTH    = 1 << 3;
        const CONTAINS_CHAR = 1 << 4;
    }
}

/// A structured filter over analyzed records. Absent fields constrain
/// nothing; present fields are conjoined by the compiler.
///
/// Length bounds are signed so that rule arithmetic like `N - 1` keeps its
/// meaning at the edges ("shorter than 0" yields `max_length = -1`, an
/// empty range that [`validate`] reports instead of silently clamping).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl ParsedFilter {
    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.word_count.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.contains_character.is_none()
    }

    /// Assemble a filter from already-typed query parameters.
    ///
    /// This is the structured-query entry point: the caller has validated
    /// each parameter as the correct primitive type, and the result goes
    /// through the same [`validate`] gate as an interpreted phrase.
    pub fn from_params(
        is_palindrome: Option<bool>,
        word_count: Option<i64>,
        min_length: Option<i64>,
        max_length: Option<i64>,
        contains_character: Option<char>,
    ) -> Self {
        ParsedFilter { is_palindrome, word_count, min_length, max_length, contains_character }
    }
}

/// Whole-object consistency check; identity on success.
///
/// Checks, in order:
/// 1. both bounds present with `min_length > max_length`;
/// 2. a negative `max_length`, which is empty against the implicit
///    `length >= 0` floor.
pub fn validate(filter: ParsedFilter) -> Result<ParsedFilter, Error> {
    if let (Some(min), Some(max)) = (filter.min_length, filter.max_length)
        && min > max
    {
        return Err(Error::InfeasibleRange { min, max });
    }
    if let Some(max) = filter.max_length
        && max < 0
    {
        return Err(Error::InfeasibleRange { min: 0, max });
    }
    Ok(filter)
}

// --- Draft accumulation ------------------------------------------------------

/// Filter under construction, with provenance masks for each field.
#[derive(Debug, Default)]
pub(crate) struct FilterDraft {
    filter: ParsedFilter,
    explicit: FieldSet,
    provisional: FieldSet,
}

fn conflict(field: &'static str, earlier: impl Display, later: impl Display) -> Error {
    Error::ParseConflict { field, earlier: earlier.to_string(), later: later.to_string() }
}

impl FilterDraft {
    pub fn filter(&self) -> &ParsedFilter {
        &self.filter
    }

    pub fn into_filter(self) -> ParsedFilter {
        self.filter
    }

    /// True when either length bound has been contributed already.
    pub fn has_length_bound(&self) -> bool {
        self.filter.min_length.is_some() || self.filter.max_length.is_some()
    }

    /// Describe the length bounds contributed so far, for conflict payloads.
    pub fn length_bounds_description(&self) -> String {
        match (self.filter.min_length, self.filter.max_length) {
            (Some(min), Some(max)) => format!("length in {min}..={max}"),
            (Some(min), None) => format!("length >= {min}"),
            (None, Some(max)) => format!("length <= {max}"),
            (None, None) => "no length bound".to_string(),
        }
    }

    /// Explicitly assert the palindrome flag.
    pub fn assert_palindrome(&mut self, wanted: bool) -> Result<(), Error> {
        if self.explicit.contains(FieldSet::PALINDROME)
            && let Some(earlier) = self.filter.is_palindrome
            && earlier != wanted
        {
            return Err(conflict("is_palindrome", earlier, wanted));
        }
        self.filter.is_palindrome = Some(wanted);
        self.explicit |= FieldSet::PALINDROME;
        Ok(())
    }

    /// Provisionally suggest a word count (shorthand like "single word").
    ///
    /// Never overrides a value that is already present.
    pub fn suggest_word_count(&mut self, count: i64) {
        if self.filter.word_count.is_none() {
            self.filter.word_count = Some(count);
            self.provisional |= FieldSet::WORD_COUNT;
        }
    }

    /// Explicitly assert a word count.
    ///
    /// Any differing prior value conflicts, provisional ones included: a
    /// phrase saying both "single word" and "exactly 3 words" contradicts
    /// itself rather than refining itself.
    pub fn assert_word_count(&mut self, count: i64) -> Result<(), Error> {
        if let Some(earlier) = self.filter.word_count
            && earlier != count
        {
            return Err(conflict("word_count", earlier, count));
        }
        self.filter.word_count = Some(count);
        self.provisional -= FieldSet::WORD_COUNT;
        self.explicit |= FieldSet::WORD_COUNT;
        Ok(())
    }

    /// Explicitly assert a minimum length bound.
    pub fn assert_min_length(&mut self, min: i64) -> Result<(), Error> {
        if self.explicit.contains(FieldSet::MIN_LENGTH)
            && let Some(earlier) = self.filter.min_length
            && earlier != min
        {
            return Err(conflict("min_length", earlier, min));
        }
        self.filter.min_length = Some(min);
        self.explicit |= FieldSet::MIN_LENGTH;
        Ok(())
    }

    /// Explicitly assert a maximum length bound.
    pub fn assert_max_length(&mut self, max: i64) -> Result<(), Error> {
        if self.explicit.contains(FieldSet::MAX_LENGTH)
            && let Some(earlier) = self.filter.max_length
            && earlier != max
        {
            return Err(conflict("max_length", earlier, max));
        }
        self.filter.max_length = Some(max);
        self.explicit |= FieldSet::MAX_LENGTH;
        Ok(())
    }

    /// Provisionally suggest a required character (vowel heuristic).
    pub fn suggest_contains_character(&mut self, ch: char) {
        if self.filter.contains_character.is_none() {
            self.filter.contains_character = Some(ch);
            self.provisional |= FieldSet::CONTAINS_CHAR;
        }
    }

    /// Explicitly assert a required character, silently overriding a
    /// provisional suggestion.
    pub fn assert_contains_character(&mut self, ch: char) -> Result<(), Error> {
        if self.explicit.contains(FieldSet::CONTAINS_CHAR)
            && let Some(earlier) = self.filter.contains_character
            && earlier != ch
        {
            return Err(conflict("contains_character", earlier, ch));
        }
        self.filter.contains_character = Some(ch);
        self.provisional -= FieldSet::CONTAINS_CHAR;
        self.explicit |= FieldSet::CONTAINS_CHAR;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_passes_feasible_ranges_through_unchanged() {
        let filter = ParsedFilter { min_length: Some(3), max_length: Some(7), ..Default::default() };
        assert_eq!(validate(filter.clone()), Ok(filter));
        assert_eq!(validate(ParsedFilter::default()), Ok(ParsedFilter::default()));
    }

    #[test]
    fn validate_rejects_inverted_bounds() {
        let filter = ParsedFilter { min_length: Some(11), max_length: Some(5), ..Default::default() };
        assert_eq!(validate(filter), Err(Error::InfeasibleRange { min: 11, max: 5 }));
    }

    #[test]
    fn validate_rejects_negative_max() {
        // "shorter than 0 characters" lands here.
        let filter = ParsedFilter { max_length: Some(-1), ..Default::default() };
        assert_eq!(validate(filter), Err(Error::InfeasibleRange { min: 0, max: -1 }));
    }

    #[test]
    fn equal_bounds_are_feasible() {
        let filter = ParsedFilter { min_length: Some(5), max_length: Some(5), ..Default::default() };
        assert!(validate(filter).is_ok());
    }

    #[test]
    fn explicit_beats_provisional_for_contains_character() {
        let mut draft = FilterDraft::default();
        draft.suggest_contains_character('a');
        draft.assert_contains_character('z').unwrap();
        assert_eq!(draft.filter().contains_character, Some('z'));
    }

    #[test]
    fn provisional_never_displaces_an_existing_value() {
        let mut draft = FilterDraft::default();
        draft.assert_contains_character('z').unwrap();
        draft.suggest_contains_character('a');
        assert_eq!(draft.filter().contains_character, Some('z'));
    }

    #[test]
    fn explicit_disagreement_is_a_conflict() {
        let mut draft = FilterDraft::default();
        draft.assert_word_count(2).unwrap();
        let err = draft.assert_word_count(3).unwrap_err();
        assert!(matches!(err, Error::ParseConflict { field: "word_count", .. }));
    }

    #[test]
    fn provisional_word_count_conflicts_with_differing_explicit() {
        let mut draft = FilterDraft::default();
        draft.suggest_word_count(1);
        let err = draft.assert_word_count(3).unwrap_err();
        assert!(matches!(err, Error::ParseConflict { field: "word_count", .. }));
    }

    #[test]
    fn repeating_the_same_assertion_is_not_a_conflict() {
        let mut draft = FilterDraft::default();
        draft.assert_palindrome(true).unwrap();
        draft.assert_palindrome(true).unwrap();
        draft.suggest_word_count(1);
        draft.assert_word_count(1).unwrap();
        assert_eq!(draft.filter().word_count, Some(1));
    }

    #[test]
    fn empty_reports_emptiness() {
        assert!(ParsedFilter::default().is_empty());
        assert!(!ParsedFilter { is_palindrome: Some(true), ..Default::default() }.is_empty());
    }

    #[test]
    fn filter_serializes_without_absent_fields() {
        let filter = ParsedFilter { word_count: Some(1), is_palindrome: Some(true), ..Default::default() };
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json, serde_json::json!({"is_palindrome": true, "word_count": 1}));
    }
}

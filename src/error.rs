//! Failure taxonomy.
//!
//! A closed set of tagged variants, one per failure kind the core can
//! detect. Each carries the minimal diagnostic payload; translating a kind
//! into a user-visible status is the caller's job. All failures are local
//! and synchronous: nothing here is retried or silently coerced into a
//! best-effort result.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The value handed to [`crate::analyze_json`] was not text.
    #[error("expected a text value, got {actual}")]
    TypeMismatch { actual: &'static str },

    /// No rule recognized anything in the phrase.
    #[error("no recognized filter pattern in phrase")]
    Unparseable,

    /// Two explicit assertions disagree on the same filter field.
    #[error("conflicting values for {field}: {earlier} vs {later}")]
    ParseConflict { field: &'static str, earlier: String, later: String },

    /// The accumulated length bounds admit no value.
    #[error("infeasible length range: min {min} > max {max}")]
    InfeasibleRange { min: i64, max: i64 },
}

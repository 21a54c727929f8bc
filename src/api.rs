//! Public API.
//!
//! Four operations, all pure, synchronous, and stateless:
//!
//! - [`analyze`] / [`analyze_json`] — build the content-addressed
//!   [`AnalysisRecord`] for an input string.
//! - [`interpret`] — translate a short English phrase into a validated
//!   [`ParsedFilter`], reporting which rules matched.
//! - [`validate`] — whole-object consistency check on a filter, shared by
//!   both entry paths.
//! - [`compile`] — translate a filter into its [`StoragePredicate`].
//!
//! There is no cache and no cross-call state; concurrent calls need no
//! coordination. Retries, timeouts, and status mapping belong to the
//! caller.

use std::time::{Duration, Instant};

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::engine::Interpreter;
use crate::{AnalysisRecord, Error, ParsedFilter, Rule, StoragePredicate, filter, predicate, rules};

static DEFAULT_RULES: Lazy<Vec<Rule>> = Lazy::new(rules::phrase::rules::get);

/// Result of interpreting one phrase.
///
/// The original phrase and the matched rule names ride along for caller
/// transparency: a client can see exactly which filters were confidently
/// extracted from its wording.
#[derive(Debug, Clone, Serialize)]
pub struct Interpretation {
    /// The phrase as given, unfolded.
    pub phrase: String,
    /// The validated filter accumulated from the phrase.
    pub filter: ParsedFilter,
    /// Names of the rules that matched, in rule order.
    pub matched_rules: Vec<&'static str>,
    /// Wall time spent interpreting.
    #[serde(skip_serializing)]
    pub elapsed: Duration,
}

/// Analyze `value` into its canonical record.
///
/// Defined for any length; minimum/maximum length gating is the caller's
/// concern. Pure except for the `created_at` timestamp.
///
/// # Example
/// ```
/// let record = textsift::analyze("Racecar");
/// assert!(record.is_palindrome);
/// assert_eq!(record.length, 7);
/// ```
pub fn analyze(value: &str) -> AnalysisRecord {
    AnalysisRecord::build(value)
}

/// Analyze a JSON value, rejecting anything that is not a string.
///
/// This is the boundary form for callers that work with decoded request
/// bodies; the failure carries the observed JSON type name.
pub fn analyze_json(value: &serde_json::Value) -> Result<AnalysisRecord, Error> {
    match value {
        serde_json::Value::String(text) => Ok(AnalysisRecord::build(text)),
        other => Err(Error::TypeMismatch { actual: json_type_name(other) }),
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Interpret a filter phrase using the default rule list.
///
/// Runs every rule in order, then the same [`validate`] gate the
/// structured path uses.
///
/// # Example
/// ```
/// let out = textsift::interpret("all single word palindromic strings").unwrap();
/// assert_eq!(out.filter.word_count, Some(1));
/// assert_eq!(out.filter.is_palindrome, Some(true));
/// ```
pub fn interpret(phrase: &str) -> Result<Interpretation, Error> {
    let started = Instant::now();
    let run = Interpreter::new(phrase, &DEFAULT_RULES).run()?;
    let validated = filter::validate(run.filter)?;

    Ok(Interpretation {
        phrase: phrase.to_string(),
        filter: validated,
        matched_rules: run.matched_rules,
        elapsed: started.elapsed(),
    })
}

/// Whole-object consistency check; identity on success.
pub fn validate(filter: ParsedFilter) -> Result<ParsedFilter, Error> {
    filter::validate(filter)
}

/// Compile a filter into its storage predicate.
///
/// This is the only filter-to-predicate translation in the crate; both the
/// structured-query path and the phrase path produce identical predicates
/// for equivalent filters.
pub fn compile(filter: &ParsedFilter) -> StoragePredicate {
    predicate::compile(filter)
}

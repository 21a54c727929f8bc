//! Phrase interpretation engine.
//!
//! Interpreting a phrase is a short, deterministic pipeline:
//!
//! ```text
//! phrase ── case fold ──► Interpreter::run
//!                           │  apply rules in order   (rules/phrase/rules.rs)
//!                           │  accumulate FilterDraft (filter.rs)
//!                           │  raise ParseConflict on explicit disagreement
//!                           ▼
//!                     ParsedFilter + matched rule names
//! ```
//!
//! Rules are independent detectors over the case-folded phrase, not a
//! grammar with backtracking. Order in the default list matters only where
//! two rules can touch the same field; the provenance tracking in
//! `FilterDraft` (provisional vs explicit) carries the override/conflict
//! policy, so the engine itself stays a plain fold.
//!
//! There is no cross-call state: every run builds its own draft, and the
//! rule list is a static, immutable table.

use crate::filter::FilterDraft;
use crate::{Error, ParsedFilter, Rule};

/// Output of one interpreter run, before validation.
#[derive(Debug)]
pub(crate) struct InterpreterRun {
    pub filter: ParsedFilter,
    /// Names of the rules that matched, in rule order.
    pub matched_rules: Vec<&'static str>,
}

/// Applies the phrase rule list to one input.
pub(crate) struct Interpreter<'a> {
    rules: &'a [Rule],
    folded: String,
}

impl<'a> Interpreter<'a> {
    pub fn new(phrase: &str, rules: &'a [Rule]) -> Self {
        Interpreter { rules, folded: phrase.to_lowercase() }
    }

    /// Run every rule in order and return the accumulated filter.
    ///
    /// Fails with [`Error::Unparseable`] when no rule contributed anything,
    /// and propagates the first [`Error::ParseConflict`] a rule raises.
    pub fn run(self) -> Result<InterpreterRun, Error> {
        let mut draft = FilterDraft::default();
        let mut matched_rules = Vec::new();

        for rule in self.rules {
            if (rule.apply)(&self.folded, &mut draft)? {
                matched_rules.push(rule.name);
            }
        }

        if draft.filter().is_empty() {
            return Err(Error::Unparseable);
        }

        Ok(InterpreterRun { filter: draft.into_filter(), matched_rules })
    }
}

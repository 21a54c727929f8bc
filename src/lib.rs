extern crate self as textsift;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod filter;
mod identity;
mod metrics;
mod predicate;
mod record;
mod rules;

pub use api::{Interpretation, analyze, analyze_json, compile, interpret, validate};
pub use error::Error;
pub use filter::ParsedFilter;
pub use predicate::{Clause, StoragePredicate};
pub use record::AnalysisRecord;

use crate::filter::FilterDraft;

// --- Internal types ---------------------------------------------------------

/// A phrase rule: a named, pure detector that inspects the case-folded
/// phrase and, on match, contributes one or more fields to the accumulating
/// [`FilterDraft`].
///
/// Rules are independent; order in the default rule list matters only where
/// two rules can touch the same field (see `engine.rs` for the policy).
pub(crate) struct Rule {
    pub name: &'static str,
    /// Returns `Ok(true)` when the rule matched and contributed fields,
    /// `Ok(false)` when it did not apply, and `Err` on a hard conflict
    /// between two explicit assertions.
    pub apply: fn(&str, &mut FilterDraft) -> Result<bool, Error>,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).field("apply", &"<function>").finish()
    }
}

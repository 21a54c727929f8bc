//! The filter phrase grammar.
//!
//! Each rule is an independent detector over the case-folded phrase (the
//! engine folds once up front, so patterns here are plain lowercase). A
//! rule either contributes fields to the draft, stays silent, or raises a
//! conflict between explicit assertions.
//!
//! Ordering in [`get`] is part of the contract where two rules touch the
//! same field: shorthand rules run before the explicit rules that may
//! override or contradict them, and the exact-length rule runs after both
//! range rules so it can tell a standalone "N characters" apart from the
//! bound inside "longer/shorter than N characters".

use crate::rules::phrase::helpers::{parse_count, preceded_by_range_idiom, single_code_point};
use crate::{Error, Rule};

/// Any mention of palindromes.
fn rule_palindrome() -> Rule {
    Rule {
        name: "palindrome mention",
        apply: |phrase, draft| {
            if !regex!(r"\bpalindrom(?:ic|es?)\b").is_match(phrase) {
                return Ok(false);
            }
            draft.assert_palindrome(true)?;
            Ok(true)
        },
    }
}

/// "single word" / "one word" shorthand; provisional, a digit form may
/// still contradict it.
fn rule_single_word() -> Rule {
    Rule {
        name: "single word shorthand",
        apply: |phrase, draft| {
            if !regex!(r"\b(?:single|one)\s+word\b").is_match(phrase) {
                return Ok(false);
            }
            draft.suggest_word_count(1);
            Ok(true)
        },
    }
}

/// "[exactly] N word(s)" with digits; explicit, so two differing counts in
/// one phrase conflict.
fn rule_word_count() -> Rule {
    Rule {
        name: "explicit word count",
        apply: |phrase, draft| {
            let mut matched = false;
            for caps in regex!(r"\b(\d+)\s+words?\b").captures_iter(phrase) {
                let Some(count) = parse_count(&caps[1]) else { continue };
                draft.assert_word_count(count)?;
                matched = true;
            }
            Ok(matched)
        },
    }
}

/// "longer than N [chars]" contributes a strict lower bound as `N + 1`.
fn rule_longer_than() -> Rule {
    Rule {
        name: "longer-than bound",
        apply: |phrase, draft| {
            let mut matched = false;
            for caps in regex!(r"\blonger\s+than\s+(\d+)\b").captures_iter(phrase) {
                let Some(bound) = parse_count(&caps[1]) else { continue };
                draft.assert_min_length(bound + 1)?;
                matched = true;
            }
            Ok(matched)
        },
    }
}

/// "shorter than N [chars]" contributes a strict upper bound as `N - 1`.
///
/// "shorter than 0" yields -1 here; the consistency checker reports that
/// as an infeasible range rather than clamping it.
fn rule_shorter_than() -> Rule {
    Rule {
        name: "shorter-than bound",
        apply: |phrase, draft| {
            let mut matched = false;
            for caps in regex!(r"\bshorter\s+than\s+(\d+)\b").captures_iter(phrase) {
                let Some(bound) = parse_count(&caps[1]) else { continue };
                draft.assert_max_length(bound - 1)?;
                matched = true;
            }
            Ok(matched)
        },
    }
}

/// Standalone "N char(s)/character(s)" pins the length exactly.
///
/// Numbers that are the bound of a longer/shorter-than idiom are skipped;
/// a phrase combining the exact idiom with a range idiom asserts the same
/// field twice in two different ways and is a conflict, not a precedence
/// question.
fn rule_exact_length() -> Rule {
    Rule {
        name: "exact length",
        apply: |phrase, draft| {
            let mut exact: Vec<i64> = Vec::new();
            for caps in regex!(r"\b(\d+)\s*(?:characters?|chars?)\b").captures_iter(phrase) {
                let full = caps.get(0).unwrap();
                if preceded_by_range_idiom(phrase, full.start()) {
                    continue;
                }
                if let Some(length) = parse_count(&caps[1]) {
                    exact.push(length);
                }
            }

            let Some(&first) = exact.first() else { return Ok(false) };
            if draft.has_length_bound() {
                return Err(Error::ParseConflict {
                    field: "length",
                    earlier: draft.length_bounds_description(),
                    later: format!("length == {first}"),
                });
            }
            for length in exact {
                draft.assert_min_length(length)?;
                draft.assert_max_length(length)?;
            }
            Ok(true)
        },
    }
}

/// "first vowel" / "initial vowel" heuristic; provisionally requires 'a'.
fn rule_vowel_heuristic() -> Rule {
    Rule {
        name: "first vowel heuristic",
        apply: |phrase, draft| {
            if !regex!(r"\b(?:first|initial)\s+vowel\b").is_match(phrase) {
                return Ok(false);
            }
            draft.suggest_contains_character('a');
            Ok(true)
        },
    }
}

/// "contain(s)/containing [the] [letter/character] X" for a single code
/// point X; explicit, overrides the vowel heuristic.
fn rule_contains_character() -> Rule {
    Rule {
        name: "explicit character",
        apply: |phrase, draft| {
            let mut matched = false;
            let pattern =
                regex!(r#"\bcontain(?:s|ing)?\s+(?:the\s+)?(?:(letter|character|char)\s+)?['"]?([^\s'"]+)"#);
            for caps in pattern.captures_iter(phrase) {
                // Multi-character tokens are not a character assertion
                // ("containing spaces" names no single character).
                let Some(ch) = single_code_point(&caps[2]) else { continue };
                // A bare digit after "contain" is the number of some other
                // assertion ("contain 3 words"); binding a digit as the
                // character requires the letter/character keyword.
                if ch.is_ascii_digit() && caps.get(1).is_none() {
                    continue;
                }
                draft.assert_contains_character(ch)?;
                matched = true;
            }
            Ok(matched)
        },
    }
}

/// The default rule list, in application order.
pub fn get() -> Vec<Rule> {
    vec![
        rule_palindrome(),
        rule_single_word(),
        rule_word_count(),
        rule_longer_than(),
        rule_shorter_than(),
        rule_exact_length(),
        rule_vowel_heuristic(),
        rule_contains_character(),
    ]
}

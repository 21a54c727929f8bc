//! Stateless text primitives.
//!
//! Everything here is a pure function over the input's Unicode code points.
//! Lengths and positions are counted in code points, never in UTF-8 bytes or
//! UTF-16 units: a supplementary-plane character (an emoji, say) counts as
//! one unit even though it occupies four bytes.

use std::collections::HashMap;

/// Count Unicode code points.
pub(crate) fn code_point_length(value: &str) -> usize {
    value.chars().count()
}

/// Case-insensitive palindrome test.
///
/// The only normalization applied is case folding; whitespace and
/// punctuation are kept, so `"race car"` is not a palindrome while
/// `"Racecar"` is.
pub(crate) fn is_palindrome(value: &str) -> bool {
    let folded: Vec<char> = value.to_lowercase().chars().collect();
    folded.iter().eq(folded.iter().rev())
}

/// Count maximal whitespace-delimited non-empty runs.
///
/// Leading/trailing whitespace contributes nothing; the empty or
/// all-whitespace string has zero words.
pub(crate) fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}

/// Tally occurrences per distinct code point, plus the distinct code points
/// in first-appearance order.
///
/// The counts account for every code point of `value` exactly once in
/// total; the returned sequence has no duplicates.
pub(crate) fn character_frequency(value: &str) -> (HashMap<char, usize>, Vec<char>) {
    let mut frequency: HashMap<char, usize> = HashMap::new();
    let mut distinct: Vec<char> = Vec::new();

    for ch in value.chars() {
        let count = frequency.entry(ch).or_insert(0);
        if *count == 0 {
            distinct.push(ch);
        }
        *count += 1;
    }

    (frequency, distinct)
}

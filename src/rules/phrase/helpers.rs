/// Parse a digit run captured by a rule regex.
///
/// Patterns only capture `\d+`, so the sole failure mode is a value too
/// large for `i64`; such a capture is treated as a non-match.
pub fn parse_count(digits: &str) -> Option<i64> {
    digits.parse::<i64>().ok()
}

/// True when the text just before `start` ends in a longer/shorter-than
/// idiom, meaning the number at `start` is that idiom's bound rather than
/// a standalone exact-length assertion.
///
/// Tolerates the same whitespace runs the range-rule patterns accept.
pub fn preceded_by_range_idiom(phrase: &str, start: usize) -> bool {
    regex!(r"(?:longer|shorter)\s+than\s*$").is_match(&phrase[..start])
}

/// Reduce a captured token to a single code point, tolerating trailing
/// punctuation ("containing z." names the character `z`).
pub fn single_code_point(token: &str) -> Option<char> {
    let trimmed = token.trim_end_matches(['.', ',', ';', ':', '!', '?']);
    let mut chars = trimmed.chars();
    let ch = chars.next()?;
    if chars.next().is_some() { None } else { Some(ch) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_idiom_lookbehind() {
        let phrase = "strings longer than 10 characters";
        let start = phrase.find("10").unwrap();
        assert!(preceded_by_range_idiom(phrase, start));

        let phrase = "strings with 10 characters";
        let start = phrase.find("10").unwrap();
        assert!(!preceded_by_range_idiom(phrase, start));
    }

    #[test]
    fn range_idiom_lookbehind_tolerates_whitespace_runs() {
        for phrase in ["longer  than 10 characters", "shorter \t than 10 chars", "longer than  10 characters"] {
            let start = phrase.find("10").unwrap();
            assert!(preceded_by_range_idiom(phrase, start), "phrase {phrase:?}");
        }
    }

    #[test]
    fn single_code_point_trims_trailing_punctuation() {
        assert_eq!(single_code_point("z"), Some('z'));
        assert_eq!(single_code_point("z."), Some('z'));
        assert_eq!(single_code_point("ab"), None);
        assert_eq!(single_code_point(""), None);
        // One code point even outside ASCII.
        assert_eq!(single_code_point("ö"), Some('ö'));
    }
}

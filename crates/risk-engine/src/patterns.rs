//! Text normalization shared by the rule matchers and the summary generator

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Any run of whitespace (spaces, tabs, newlines, form feeds), plus the
    /// file/group/record/unit separators U+001C..U+001F
    static ref WHITESPACE_RUN: Regex = Regex::new(r"[\s\x1C-\x1F]+").unwrap();
}

/// Lowercase text for case-insensitive rule matching
///
/// Line structure is left alone so that `.` in rule patterns keeps
/// stopping at line breaks.
pub fn normalize_for_matching(text: &str) -> String {
    text.to_lowercase()
}

/// Collapse every whitespace run to a single space and trim both ends
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_lowercases_only() {
        assert_eq!(
            normalize_for_matching("HOLD Harmless\nNet 45"),
            "hold harmless\nnet 45"
        );
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(
            collapse_whitespace("  Section 1.\n\n\tThe   Parties\r\n agree. "),
            "Section 1. The Parties agree."
        );
    }

    #[test]
    fn test_collapse_separator_controls() {
        assert_eq!(
            collapse_whitespace("\x1CClause 1\x1D\x1E Clause 2\x1F"),
            "Clause 1 Clause 2"
        );
    }

    #[test]
    fn test_collapse_whitespace_empty() {
        assert_eq!(collapse_whitespace(" \n\t "), "");
    }
}

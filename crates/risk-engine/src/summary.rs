//! Short plain-text preview of the extracted contract

use crate::patterns::collapse_whitespace;

/// Default summary budget, in characters
pub const DEFAULT_SUMMARY_CHARS: usize = 500;

const ELLIPSIS: &str = "...";

/// Builds a summary of at most `max_chars` characters (plus an ellipsis)
///
/// Prefers ending on the last period when it falls in the final 30% of the
/// budget; otherwise cuts hard and appends `...`. All positions are counted
/// in characters so multi-byte text is never split mid-codepoint.
pub fn create_summary(text: &str, max_chars: usize) -> String {
    let cleaned = collapse_whitespace(text);

    if cleaned.chars().count() <= max_chars {
        return cleaned;
    }

    let head: String = cleaned.chars().take(max_chars).collect();
    let last_period = head.rfind('.').map(|byte| head[..byte].chars().count());

    match last_period {
        // position > 0.7 * max_chars
        Some(pos) if pos * 10 > max_chars * 7 => head.chars().take(pos + 1).collect(),
        _ => head + ELLIPSIS,
    }
}

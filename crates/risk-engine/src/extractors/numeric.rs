// Numeric extraction for payment term checks
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// "net 45", "net  60": net terms with at least two digits
    static ref NET_TERMS_PATTERN: Regex = Regex::new(r"net\s+(\d{2,})").unwrap();

    /// A single Unicode decimal digit, matching what `\d` accepts
    static ref DECIMAL_DIGIT: Regex = Regex::new(r"^\d$").unwrap();
}

/// Net payment days found in the text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetTerms {
    /// ASCII digits with leading zeros removed
    pub digits: String,
    /// Parsed value, `None` when it does not fit in a u64
    pub days: Option<u64>,
}

impl NetTerms {
    /// True when the term is longer than `limit` days
    pub fn exceeds(&self, limit: u64) -> bool {
        match self.days {
            Some(days) => days > limit,
            // Too many digits for a u64 is always over any limit
            None => true,
        }
    }
}

/// Extracts the first "net N" term from lowercased text
///
/// Only the first occurrence is considered, even when a later one
/// would be longer.
pub fn extract_net_terms(text: &str) -> Option<NetTerms> {
    let caps = NET_TERMS_PATTERN.captures(text)?;
    let raw = caps.get(1)?.as_str();

    let ascii: String = raw.chars().map(to_ascii_digit).collect();
    let trimmed = ascii.trim_start_matches('0');
    let digits = if trimmed.is_empty() { "0" } else { trimmed };

    Some(NetTerms {
        digits: digits.to_string(),
        days: digits.parse::<u64>().ok(),
    })
}

/// Maps any Unicode decimal digit to its ASCII counterpart
///
/// Decimal digits are encoded in contiguous runs made of whole 0..=9
/// blocks, so the value is the offset from the start of the run, mod 10.
fn to_ascii_digit(c: char) -> char {
    if c.is_ascii_digit() {
        return c;
    }

    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }

    let value = (c as u32 - start) % 10;
    char::from_digit(value, 10).unwrap_or('0')
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}

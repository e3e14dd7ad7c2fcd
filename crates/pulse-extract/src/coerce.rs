//! Numeric coercion for human-readable counts.

use std::sync::LazyLock;

use regex::Regex;

/// First decimal number in the string, optionally followed by a K/M/B
/// magnitude suffix (case-insensitive).
static COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9][0-9.]*)\s*([KMBkmb])?").expect("valid regex"));

/// Parses a count string that may carry a `K`/`M`/`B` suffix into an integer.
///
/// Thousands separators are stripped, the leading decimal number is scaled
/// by the suffix (1e3/1e6/1e9) and the result truncated. Anything that does
/// not contain a parseable number — including the empty string — coerces
/// to 0, never to an error: a malformed count must not abort extraction.
#[must_use]
pub fn coerce_count(raw: &str) -> u64 {
    let cleaned = raw.trim().replace(',', "");

    let Some(caps) = COUNT_RE.captures(&cleaned) else {
        return 0;
    };
    let Ok(value) = caps[1].parse::<f64>() else {
        // e.g. "1.2.3" — multiple dots slip through the character class
        return 0;
    };

    let multiplier = match caps.get(2).map(|m| m.as_str().to_ascii_uppercase()) {
        Some(s) if s == "K" => 1_000.0,
        Some(s) if s == "M" => 1_000_000.0,
        Some(s) if s == "B" => 1_000_000_000.0,
        _ => 1.0,
    };

    let scaled = value * multiplier;
    if scaled.is_finite() && scaled > 0.0 {
        scaled.trunc() as u64
    } else {
        0
    }
}

//! Text to number conversion shared by the extractors and the aggregator.
//!
//! Every helper returns `None` instead of failing; callers pick the sentinel
//! (null for player goals, zero for aggregate contributions).

use std::borrow::Cow;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

// Group 1: goals scored, group 2: goals conceded
const REGEX_GOALS: &'static str = r#"^\s*([0-9]+)\s*-\s*([0-9]+)\s*$"#;

lazy_static! {
    static ref RE_GOALS: Regex = Regex::new(REGEX_GOALS).unwrap();
}

/// Maps Persian (U+06F0..) and Arabic-Indic (U+0660..) digits to ASCII.
pub fn normalize_digits(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }

    Cow::Owned(
        text.chars()
            .map(|c| match c {
                '\u{06F0}'..='\u{06F9}' => char::from(b'0' + (c as u32 - 0x06F0) as u8),
                '\u{0660}'..='\u{0669}' => char::from(b'0' + (c as u32 - 0x0660) as u8),
                c => c,
            })
            .collect(),
    )
}

pub fn parse_int(text: &str) -> Option<u32> {
    let text = normalize_digits(text.trim());
    match text.parse() {
        Ok(v) => Some(v),
        Err(e) => {
            trace!("Failed to coerce '{}' to an integer: {}", text, e);
            None
        }
    }
}

/// Parses the first whitespace-delimited token, so "5 (Top Scorer)" gives 5.
pub fn leading_int(text: &str) -> Option<u32> {
    text.split_whitespace().next().and_then(parse_int)
}

/// Splits an "A-B" goals string into its two sides.
pub fn goals_pair(text: &str) -> Option<(u32, u32)> {
    let text = normalize_digits(text);
    let captures = match RE_GOALS.captures(&text) {
        Some(v) => v,
        None => {
            trace!("'{}' is not a goals pair", text);
            return None;
        }
    };

    Some((captures[1].parse().ok()?, captures[2].parse().ok()?))
}

//! Free-text duration parsing
//!
//! Durations are written as loose text such as `"1h 30min"`, `"1 h 30 min"` or
//! `"1h30min"`. Only digit runs directly followed (after at most one whitespace)
//! by the unit `h` or `min` are counted; everything else in the text is ignored.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Sum of all hour and minute tokens found in a set of duration strings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DurationTotal {
    pub hours: u64,
    pub minutes: u64,
}

impl DurationTotal {
    /// Total expressed in fractional hours
    pub fn as_hours(&self) -> f64 {
        self.hours as f64 + self.minutes as f64 / 60.0
    }
}

fn hour_token() -> &'static Regex {
    static HOUR_TOKEN: OnceLock<Regex> = OnceLock::new();
    HOUR_TOKEN.get_or_init(|| Regex::new(r"([0-9]+)\s?h").unwrap())
}

fn minute_token() -> &'static Regex {
    static MINUTE_TOKEN: OnceLock<Regex> = OnceLock::new();
    MINUTE_TOKEN.get_or_init(|| Regex::new(r"([0-9]+)\s?min").unwrap())
}

/// Sum the digits of every match of `pattern` in `text`.
///
/// A match whose unit is immediately followed by another ASCII letter is a
/// different word ("hour", "minutes") and is skipped.
fn sum_tokens(pattern: &Regex, text: &str) -> u64 {
    pattern
        .captures_iter(text)
        .filter(|caps| {
            let end = caps.get(0).map_or(text.len(), |m| m.end());
            !text[end..]
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic())
        })
        .filter_map(|caps| caps.get(1))
        // Digit runs too long for u64 saturate rather than fail
        .map(|digits| digits.as_str().parse::<u64>().unwrap_or(u64::MAX))
        .fold(0u64, |acc, n| acc.saturating_add(n))
}

/// Sum of all `<int> h` tokens in `text`
pub fn sum_hours(text: &str) -> u64 {
    sum_tokens(hour_token(), text)
}

/// Sum of all `<int> min` tokens in `text`
pub fn sum_minutes(text: &str) -> u64 {
    sum_tokens(minute_token(), text)
}

/// Parse every value and sum its hour and minute tokens.
///
/// Values are joined with a single space before matching, so a token never
/// spans two values unless the unit stands alone in the next one.
pub fn parse_durations<I, S>(values: I) -> DurationTotal
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scratch = String::new();
    for value in values {
        if !scratch.is_empty() {
            scratch.push(' ');
        }
        scratch.push_str(value.as_ref());
    }

    DurationTotal {
        hours: sum_hours(&scratch),
        minutes: sum_minutes(&scratch),
    }
}

/// Total of all duration values in fractional hours
pub fn total_hours<I, S>(values: I) -> f64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_durations(values).as_hours()
}

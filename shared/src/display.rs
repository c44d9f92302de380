//! Text formatting for bookmark cards.

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike};
use thiserror::Error;

/// Titles longer than this many characters are cut and suffixed with `...`.
pub const TITLE_MAX_CHARS: usize = 30;

const LOCAL_FORMATS: [&str; 4] =
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Failure to read a `createdAt` value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    /// Neither RFC 3339 nor a bare ISO-8601 local date-time.
    #[error("unrecognised timestamp: {0}")]
    Unrecognised(String),
}

/// Cuts `title` to [`TITLE_MAX_CHARS`] characters.
pub fn truncate_title(title: &str) -> String {
    truncate_chars(title, TITLE_MAX_CHARS)
}

/// Cuts `text` to `max_chars` characters, appending `...` when cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Reads an ISO-8601 timestamp as wall-clock time.
///
/// Offsets, when present, are kept as the local time they describe.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, TimestampError> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Ok(with_offset.naive_local());
    }
    LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .ok_or_else(|| TimestampError::Unrecognised(raw.to_string()))
}

/// `2022년 11월 27일 오후 3시 5분`.
///
/// Hours above 12 are shown minus 12; midnight stays `오전 0시` and noon
/// `오후 12시`. Nothing is zero padded.
pub fn format_korean_datetime(at: &NaiveDateTime) -> String {
    let hour = at.hour();
    let meridiem = if hour < 12 { "오전" } else { "오후" };
    let display_hour = if hour > 12 { hour - 12 } else { hour };
    format!(
        "{}년 {}월 {}일 {} {}시 {}분",
        at.year(),
        at.month(),
        at.day(),
        meridiem,
        display_hour,
        at.minute()
    )
}

/// Formats `createdAt` for a card, falling back to the raw value.
pub fn created_at_label(raw: &str) -> String {
    match parse_timestamp(raw) {
        Ok(at) => format_korean_datetime(&at),
        Err(_) => raw.to_string(),
    }
}

//! Canonical week-key codec and local date parsing.
//!
//! # Responsibility
//! - Format a week start as `"week-YYYY-MM-DDT00:00:00±HH:MM"`, the local
//!   midnight of the week's first day with the zone's UTC offset.
//! - Extract the embedded calendar date back out of such a key.
//! - Parse `"YYYY-MM-DD"` strings by calendar components, never through a
//!   UTC epoch round trip.
//!
//! # Invariants
//! - The key layout is fixed: 5-byte `"week-"` prefix, 10-byte date,
//!   `"T00:00:00"`, signed `HH:MM` offset.
//! - The offset is east-positive, the sign-flip of the minutes-behind-UTC
//!   convention the external index's producer primitive reports.
//! - Malformed keys are contract violations and fail fast.

use chrono::{FixedOffset, Local, NaiveDate, Offset};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Prefix of every canonical week key.
pub const WEEK_KEY_PREFIX: &str = "week-";

/// Byte length of the embedded `YYYY-MM-DD` date.
const KEY_DATE_LEN: usize = 10;

pub type CodecResult<T> = Result<T, CodecError>;

/// Fail-fast error for malformed codec input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Key does not begin with the `"week-"` prefix.
    MissingKeyPrefix(String),
    /// Key is too short to carry an embedded date.
    TruncatedKey(String),
    /// Embedded or standalone date text is not a valid `YYYY-MM-DD` date.
    InvalidDate(String),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingKeyPrefix(key) => {
                write!(f, "week key missing `{WEEK_KEY_PREFIX}` prefix: `{key}`")
            }
            Self::TruncatedKey(key) => write!(f, "week key too short: `{key}`"),
            Self::InvalidDate(text) => write!(f, "invalid calendar date: `{text}`"),
        }
    }
}

impl Error for CodecError {}

/// Formats a week start date as a canonical lookup key.
///
/// `utc_offset` is the local zone's offset from UTC, east-positive. The
/// output always represents local midnight of `week_start`.
pub fn format_week_key(week_start: NaiveDate, utc_offset: FixedOffset) -> String {
    format!(
        "{WEEK_KEY_PREFIX}{}T00:00:00{}",
        week_start.format("%Y-%m-%d"),
        format_utc_offset(utc_offset)
    )
}

/// Extracts the calendar date embedded at the fixed offset of a canonical
/// key.
///
/// # Errors
/// Fails fast on a missing prefix, a truncated key, or an unparseable
/// embedded date; keys are programmatic input, not user data.
pub fn parse_week_key_date(key: &str) -> CodecResult<NaiveDate> {
    let rest = key
        .strip_prefix(WEEK_KEY_PREFIX)
        .ok_or_else(|| CodecError::MissingKeyPrefix(key.to_string()))?;
    let date_text = rest
        .get(..KEY_DATE_LEN)
        .ok_or_else(|| CodecError::TruncatedKey(key.to_string()))?;
    parse_local_date(date_text)
}

/// Parses a `"YYYY-MM-DD"` string by calendar components.
///
/// Component parsing avoids the classic off-by-one-day bug that UTC-epoch
/// parsing produces for viewers with a negative UTC offset.
pub fn parse_local_date(text: &str) -> CodecResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| CodecError::InvalidDate(text.to_string()))
}

/// Returns the host's current UTC offset, east-positive.
pub fn local_utc_offset() -> FixedOffset {
    Local::now().offset().fix()
}

fn format_utc_offset(offset: FixedOffset) -> String {
    let total_minutes = offset.local_minus_utc() / 60;
    let sign = if total_minutes < 0 { '-' } else { '+' };
    let magnitude = total_minutes.abs();
    format!("{sign}{:02}:{:02}", magnitude / 60, magnitude % 60)
}

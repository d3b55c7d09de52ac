//! Week-key correction and index-wide reconciliation.
//!
//! # Responsibility
//! - Shift keys indexed under a stale week-start assumption forward to
//!   the next occurrence of the configured start day.
//! - Re-key an entire external note index in one pass.
//!
//! # Invariants
//! - An unspecified week-start setting leaves every key unchanged; there
//!   is nothing to correct against.
//! - A key whose embedded date already falls on the configured start day
//!   is returned unchanged.
//! - Any other key shifts to the next occurrence of the start day
//!   strictly after the embedded date. This boundary was tuned against
//!   the real external index data and is a fixed contract; do not
//!   re-derive it.

use crate::codec::week_key::{format_week_key, parse_week_key_date, CodecError, CodecResult};
use crate::model::week_start::WeekStartDay;
use chrono::{Datelike, Days, FixedOffset, NaiveDate};
use std::collections::HashMap;

/// Snapshot of an external note index: canonical week key to opaque file
/// handle.
pub type NoteIndex<H> = HashMap<String, H>;

/// Corrects one canonical key against the configured week-start day.
///
/// # Errors
/// Malformed keys fail fast; the index producer owns the key format and a
/// bad key is its bug, not user data to degrade around.
pub fn correct_week_key(
    key: &str,
    week_start_day: WeekStartDay,
    utc_offset: FixedOffset,
) -> CodecResult<String> {
    let WeekStartDay::Day(target) = week_start_day else {
        return Ok(key.to_string());
    };

    let embedded = parse_week_key_date(key)?;
    if embedded.weekday() == target {
        return Ok(key.to_string());
    }

    let days_forward =
        (7 + target.num_days_from_sunday() - embedded.weekday().num_days_from_sunday()) % 7;
    let corrected = embedded
        .checked_add_days(Days::new(u64::from(days_forward)))
        .ok_or_else(|| CodecError::InvalidDate(key.to_string()))?;

    Ok(format_week_key(corrected, utc_offset))
}

/// Re-keys an entire note index against the configured week-start day.
///
/// File handles are carried over unchanged. Key collisions after
/// correction are not expected in practice and resolve last-write-wins.
///
/// # Errors
/// Propagates the first malformed key encountered.
pub fn reconcile_note_index<H>(
    index: NoteIndex<H>,
    week_start_day: WeekStartDay,
    utc_offset: FixedOffset,
) -> CodecResult<NoteIndex<H>> {
    let mut corrected = NoteIndex::with_capacity(index.len());
    for (key, handle) in index {
        corrected.insert(correct_week_key(&key, week_start_day, utc_offset)?, handle);
    }
    Ok(corrected)
}

/// Returns whether the index holds a note for the given week start.
pub fn has_note_for_week<H>(
    index: &NoteIndex<H>,
    week_start: NaiveDate,
    utc_offset: FixedOffset,
) -> bool {
    index.contains_key(&format_week_key(week_start, utc_offset))
}

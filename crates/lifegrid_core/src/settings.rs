//! Settings normalization with documented fallbacks.
//!
//! # Responsibility
//! - Turn raw, human-edited settings strings into a validated
//!   `CalendarSpec`.
//! - Expose the strict validators for programmatic callers.
//!
//! # Invariants
//! - Settings-level input never fails visibly: invalid values are
//!   replaced by documented fallbacks with a warn-level log, and
//!   computation proceeds. A transient bad setting must not blank the
//!   whole view.
//! - The strict validators reject instead of substituting; they serve
//!   callers for whom bad input is a bug.

use crate::codec::week_key::parse_local_date;
use crate::model::week::CalendarSpec;
use crate::model::week_start::WeekStartDay;
use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

/// Lifespan substituted when the configured value is out of range.
pub const DEFAULT_LIFESPAN_YEARS: u16 = 76;
/// Inclusive lower bound for a configurable lifespan.
pub const MIN_LIFESPAN_YEARS: u16 = 1;
/// Inclusive upper bound for a configurable lifespan.
pub const MAX_LIFESPAN_YEARS: u16 = 200;

/// Raw settings exactly as the host persists them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCalendarSettings {
    /// Birth date as an ISO `YYYY-MM-DD` string.
    pub birth_date: String,
    /// Lifespan as a string convertible to an integer in `[1, 200]`.
    pub lifespan_years: String,
    /// English day-name string, or absent for the library default.
    pub week_start_day: Option<String>,
}

/// Birth date substituted when the configured value does not parse.
pub fn fallback_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).expect("fallback birth date is a valid calendar date")
}

/// Normalizes raw settings into a validated spec, substituting fallbacks.
///
/// # Contract
/// - Never fails; every substitution is logged at warn level.
/// - Birth date fallback: 2000-01-01. Lifespan fallback: 76.
/// - Week-start normalization cannot fail (unrecognized names become
///   `Unspecified`).
pub fn normalize_settings(raw: &RawCalendarSettings) -> CalendarSpec {
    let birth_date = match parse_local_date(&raw.birth_date) {
        Ok(date) => date,
        Err(_) => {
            let fallback = fallback_birth_date();
            warn!(
                "event=settings_fallback module=settings field=birth_date value=`{}` fallback={fallback}",
                raw.birth_date
            );
            fallback
        }
    };

    let lifespan_years = validate_lifespan(&raw.lifespan_years).unwrap_or_else(|| {
        warn!(
            "event=settings_fallback module=settings field=lifespan_years value=`{}` fallback={DEFAULT_LIFESPAN_YEARS}",
            raw.lifespan_years
        );
        DEFAULT_LIFESPAN_YEARS
    });

    CalendarSpec {
        birth_date,
        lifespan_years,
        week_start_day: WeekStartDay::from_day_name(raw.week_start_day.as_deref()),
    }
}

/// Strictly validates a lifespan string.
///
/// Returns `None` for non-numeric input and for values outside
/// `[MIN_LIFESPAN_YEARS, MAX_LIFESPAN_YEARS]`; both bounds are accepted.
pub fn validate_lifespan(raw: &str) -> Option<u16> {
    raw.trim()
        .parse::<u16>()
        .ok()
        .filter(|years| (MIN_LIFESPAN_YEARS..=MAX_LIFESPAN_YEARS).contains(years))
}

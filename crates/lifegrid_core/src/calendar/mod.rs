//! Calendar generation, grouping and classification.
//!
//! # Responsibility
//! - Provide the shared week-boundary arithmetic used by the generator,
//!   the year-grouping engine and the key-correction codec.
//! - Convert low-level date-library failures into typed errors at one
//!   seam.
//!
//! # Invariants
//! - All week boundaries in this crate come from `start_of_week` and
//!   `enumerate_week_starts`; no caller re-derives them.
//! - Range misuse (`last < first`) fails fast; calendar overflow is a
//!   typed error the generator boundary downgrades to an empty result.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod classify;
pub mod generator;
pub mod grouping;

pub type DateMathResult<T> = Result<T, DateMathError>;

/// Low-level calendar arithmetic error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateMathError {
    /// Caller passed a week range whose end precedes its start.
    InvalidRange { first: NaiveDate, last: NaiveDate },
    /// Caller passed a zero group size to the year-grouping engine.
    ZeroGroupSize,
    /// Date arithmetic left the representable calendar range.
    Overflow,
}

impl Display for DateMathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRange { first, last } => {
                write!(f, "invalid week range: last {last} precedes first {first}")
            }
            Self::ZeroGroupSize => write!(f, "year-group size must be at least 1"),
            Self::Overflow => write!(f, "date arithmetic overflowed the calendar range"),
        }
    }
}

impl Error for DateMathError {}

/// Returns the start of the calendar week containing `date`.
///
/// Returns `None` only when the result would precede the representable
/// calendar range.
pub fn start_of_week(date: NaiveDate, week_start: Weekday) -> Option<NaiveDate> {
    let days_since_start =
        (7 + date.weekday().num_days_from_sunday() - week_start.num_days_from_sunday()) % 7;
    date.checked_sub_days(Days::new(u64::from(days_since_start)))
}

/// Advances a date by whole calendar years, leap-safe.
///
/// February 29 anchors clamp to February 28 in non-leap target years.
pub fn add_years(date: NaiveDate, years: u16) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(u32::from(years) * 12))
}

/// Enumerates week-start dates from `first` through `last` inclusive, one
/// per calendar week in ascending order.
///
/// This is the single week-enumeration primitive; both the flat generator
/// and the year-grouping engine go through it so that 52/53-week years
/// fall out of the real calendar rather than a fixed count.
///
/// # Errors
/// - `InvalidRange` when `last < first` (caller contract violation).
/// - `Overflow` when stepping past the representable calendar range.
pub fn enumerate_week_starts(first: NaiveDate, last: NaiveDate) -> DateMathResult<Vec<NaiveDate>> {
    if last < first {
        return Err(DateMathError::InvalidRange { first, last });
    }

    let mut starts = Vec::new();
    let mut cursor = first;
    while cursor <= last {
        starts.push(cursor);
        cursor = cursor
            .checked_add_days(Days::new(7))
            .ok_or(DateMathError::Overflow)?;
    }
    Ok(starts)
}

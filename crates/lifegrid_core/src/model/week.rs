//! Calendar output value types.
//!
//! # Responsibility
//! - Define the `Week`, `CalendarData` and `YearGroup` shapes consumed by
//!   the presentation layer.
//! - Define the validated `CalendarSpec` input produced by the settings
//!   layer.
//!
//! # Invariants
//! - `Week.start_date` always falls on the resolved week-start day.
//! - `Week.index` is 0-based and strictly increasing within one sequence;
//!   it restarts at 0 inside each `YearGroup`.
//! - Instances are constructed only by the generator/grouping engine and
//!   never mutated afterwards.

use crate::model::week_start::WeekStartDay;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Validated, normalized input to the calendar generator.
///
/// Produced by [`crate::settings::normalize_settings`], which applies the
/// fallback policy for human-edited settings. Programmatic callers
/// constructing this directly are expected to provide sane values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarSpec {
    /// Valid calendar birth date.
    pub birth_date: NaiveDate,
    /// Projected lifespan in whole years, within `[1, 200]`.
    pub lifespan_years: u16,
    /// Configured first day of the week.
    pub week_start_day: WeekStartDay,
}

/// One calendar week of the generated lifespan grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    /// 0-based position within its owning sequence or group.
    pub index: u32,
    /// First day of this calendar week.
    pub start_date: NaiveDate,
}

/// Past/present/future classification of one week relative to an
/// explicitly supplied "as-of" date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStatus {
    /// The week ended before the as-of date.
    Past,
    /// The week contains the as-of date.
    Present,
    /// The week starts after the as-of date.
    Future,
}

/// Full generator output for the flat ("standard") rendering mode.
///
/// Constructed fresh on every input change and superseded wholesale by the
/// next recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarData {
    /// Validated birth date the sequence was derived from.
    pub birth_date: NaiveDate,
    /// Validated lifespan in years.
    pub lifespan_years: u16,
    /// Week-start-day setting used for every boundary in `weeks`.
    pub week_start_day: WeekStartDay,
    /// Start of the calendar week containing `birth_date`.
    pub birth_week_start: NaiveDate,
    /// `birth_date` advanced by `lifespan_years` calendar years.
    pub death_date: NaiveDate,
    /// Start of the calendar week containing `death_date`.
    pub death_week_start: NaiveDate,
    /// Every week from the birth week through the death week inclusive.
    pub weeks: Vec<Week>,
    /// False only when internal date math failed and the result was
    /// degraded to an empty grid; the date fields then fall back to
    /// `birth_date`.
    pub has_weeks: bool,
}

/// A calendar-accurate bucket of consecutive weeks spanning a group-size
/// worth of years (the final group may span fewer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearGroup {
    /// Weeks of this group, re-indexed from 0.
    pub weeks: Vec<Week>,
}

//! Week-start-day representation and normalizer.
//!
//! # Responsibility
//! - Convert between the day-name, numeric-index and "unspecified"
//!   representations of "what day does the week start on".
//! - Resolve "unspecified" to the date library's default week start.
//!
//! # Invariants
//! - The seven valid lowercase day names round-trip losslessly.
//! - Unrecognized or missing input normalizes to `Unspecified`, never an
//!   error.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Week start used when the setting is `Unspecified`.
///
/// Matches the `en` locale default of the date library the external note
/// indexes were built with.
pub const DEFAULT_WEEK_START: Weekday = Weekday::Sun;

/// Lowercase English day names indexed by days-from-Sunday.
const DAY_NAMES: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

/// Configured first day of the calendar week.
///
/// `Unspecified` defers to [`DEFAULT_WEEK_START`] for calendar math but is
/// preserved as its own state because key correction must treat it as
/// "nothing to correct against".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WeekStartDay {
    /// No explicit setting; calendar math uses the library default.
    #[default]
    Unspecified,
    /// Weeks begin on this weekday.
    Day(Weekday),
}

impl WeekStartDay {
    /// Normalizes a day-name setting string.
    ///
    /// Matching is case-insensitive over the seven English day names.
    /// Anything else, including `None`, empty or unrecognized text, yields
    /// `Unspecified`. No error is ever raised for settings input.
    pub fn from_day_name(name: Option<&str>) -> Self {
        let Some(name) = name else {
            return Self::Unspecified;
        };
        match name.trim().to_ascii_lowercase().as_str() {
            "sunday" => Self::Day(Weekday::Sun),
            "monday" => Self::Day(Weekday::Mon),
            "tuesday" => Self::Day(Weekday::Tue),
            "wednesday" => Self::Day(Weekday::Wed),
            "thursday" => Self::Day(Weekday::Thu),
            "friday" => Self::Day(Weekday::Fri),
            "saturday" => Self::Day(Weekday::Sat),
            _ => Self::Unspecified,
        }
    }

    /// Normalizes a numeric index, 0 (Sunday) through 6 (Saturday).
    ///
    /// Indices outside `0..=6` yield `Unspecified`.
    pub fn from_index(index: i64) -> Self {
        match index {
            0 => Self::Day(Weekday::Sun),
            1 => Self::Day(Weekday::Mon),
            2 => Self::Day(Weekday::Tue),
            3 => Self::Day(Weekday::Wed),
            4 => Self::Day(Weekday::Thu),
            5 => Self::Day(Weekday::Fri),
            6 => Self::Day(Weekday::Sat),
            _ => Self::Unspecified,
        }
    }

    /// Returns the canonical lowercase day name, or `"unspecified"`.
    pub fn day_name(self) -> &'static str {
        match self {
            Self::Unspecified => "unspecified",
            Self::Day(day) => DAY_NAMES[day.num_days_from_sunday() as usize],
        }
    }

    /// Returns the numeric index 0 (Sunday) through 6 (Saturday), or `None`
    /// when unspecified.
    pub fn index(self) -> Option<u32> {
        match self {
            Self::Unspecified => None,
            Self::Day(day) => Some(day.num_days_from_sunday()),
        }
    }

    /// Resolves to a concrete weekday for calendar math.
    pub fn resolve(self) -> Weekday {
        match self {
            Self::Unspecified => DEFAULT_WEEK_START,
            Self::Day(day) => day,
        }
    }
}

impl From<String> for WeekStartDay {
    fn from(value: String) -> Self {
        Self::from_day_name(Some(value.as_str()))
    }
}

impl From<WeekStartDay> for String {
    fn from(value: WeekStartDay) -> Self {
        value.day_name().to_string()
    }
}

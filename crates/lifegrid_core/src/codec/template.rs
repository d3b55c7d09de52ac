//! Dynamic `{{...}}` template expansion for folder and filename settings.
//!
//! # Responsibility
//! - Replace `{{date}}` / `{{date:FORMAT}}` placeholders with the given
//!   date, leaving literal text untouched.
//! - Resolve the fixed non-date vocabulary (`{{start_date}}`,
//!   `{{end_date}}`, `{{current_date}}`, `{{index}}`) relative to the week
//!   containing the given date.
//!
//! # Invariants
//! - Interior whitespace inside a placeholder is tolerated.
//! - Unknown placeholder names pass through unchanged.
//! - A string is dynamic iff it contains both `{{` and `}}`.

use crate::calendar::start_of_week;
use crate::codec::pattern::format_date_tokens;
use crate::model::week_start::WeekStartDay;
use chrono::{Datelike, Days, NaiveDate};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*(date|start_date|end_date|current_date|index)\s*(?::\s*([^}]*?)\s*)?\}\}")
        .expect("valid placeholder regex")
});

/// Returns whether a settings string contains a dynamic segment.
pub fn is_dynamic(text: &str) -> bool {
    text.contains("{{") && text.contains("}}")
}

/// Expands every recognized placeholder in `input` against `date`.
///
/// `default_format` applies to placeholders that omit a `:FORMAT` suffix.
/// Week-relative placeholders use the week containing `date` under the
/// supplied week-start rule: `{{start_date}}` is the week's first day,
/// `{{end_date}}` its last, `{{current_date}}` the date itself, and
/// `{{index}}` the 1-based position of that week among the week starts of
/// its calendar year.
pub fn expand_dynamic_dates(
    input: &str,
    date: NaiveDate,
    week_start_day: WeekStartDay,
    default_format: &str,
) -> String {
    PLACEHOLDER_RE
        .replace_all(input, |caps: &Captures<'_>| {
            let format = caps
                .get(2)
                .map(|m| m.as_str())
                .filter(|text| !text.is_empty())
                .unwrap_or(default_format);
            let week_start = start_of_week(date, week_start_day.resolve()).unwrap_or(date);

            match &caps[1] {
                "date" | "current_date" => format_date_tokens(date, format),
                "start_date" => format_date_tokens(week_start, format),
                "end_date" => {
                    let week_end = week_start
                        .checked_add_days(Days::new(6))
                        .unwrap_or(week_start);
                    format_date_tokens(week_end, format)
                }
                "index" => week_index_in_year(date, week_start_day).to_string(),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Returns the 1-based index of the week containing `date` among the week
/// starts of its calendar year, under the active week-start rule.
///
/// The week containing January 1st is index 1.
pub fn week_index_in_year(date: NaiveDate, week_start_day: WeekStartDay) -> u32 {
    let day = week_start_day.resolve();
    let jan_first =
        NaiveDate::from_ymd_opt(date.year(), 1, 1).expect("January 1st exists in every year");
    match (start_of_week(jan_first, day), start_of_week(date, day)) {
        (Some(first_week), Some(this_week)) => {
            ((this_week - first_week).num_days() / 7 + 1) as u32
        }
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::{expand_dynamic_dates, is_dynamic, week_index_in_year};
    use crate::model::week_start::WeekStartDay;
    use chrono::{NaiveDate, Weekday};

    const MONDAY_START: WeekStartDay = WeekStartDay::Day(Weekday::Mon);

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn date_placeholder_honors_its_own_format() {
        let out = expand_dynamic_dates("{{date:YYYY}}", date(2024, 3, 15), MONDAY_START, "YYYY-MM-DD");
        assert_eq!(out, "2024");
    }

    #[test]
    fn bare_date_placeholder_uses_the_default_format() {
        let out = expand_dynamic_dates("{{date}}", date(2024, 3, 15), MONDAY_START, "YYYY-MM-DD");
        assert_eq!(out, "2024-03-15");
    }

    #[test]
    fn literal_text_is_left_untouched() {
        let out = expand_dynamic_dates(
            "journal/{{date:YYYY}}/week-{{date:WW}}.md",
            date(2024, 3, 15),
            MONDAY_START,
            "YYYY-MM-DD",
        );
        assert_eq!(out, "journal/2024/week-11.md");
    }

    #[test]
    fn interior_whitespace_is_tolerated() {
        let out = expand_dynamic_dates("{{ date : YYYY }}", date(2024, 3, 15), MONDAY_START, "YYYY-MM-DD");
        assert_eq!(out, "2024");
    }

    #[test]
    fn week_relative_placeholders_resolve_against_the_containing_week() {
        // 2024-03-15 is a Friday; its Monday-start week is 03-11 .. 03-17.
        let d = date(2024, 3, 15);
        assert_eq!(
            expand_dynamic_dates("{{start_date}}", d, MONDAY_START, "YYYY-MM-DD"),
            "2024-03-11"
        );
        assert_eq!(
            expand_dynamic_dates("{{end_date}}", d, MONDAY_START, "YYYY-MM-DD"),
            "2024-03-17"
        );
        assert_eq!(
            expand_dynamic_dates("{{current_date}}", d, MONDAY_START, "YYYY-MM-DD"),
            "2024-03-15"
        );
    }

    #[test]
    fn index_placeholder_counts_weeks_from_the_week_of_january_first() {
        // 2024-01-01 is a Monday, so under a Monday start the year's weeks
        // align exactly with month boundaries.
        assert_eq!(week_index_in_year(date(2024, 1, 1), MONDAY_START), 1);
        assert_eq!(week_index_in_year(date(2024, 1, 8), MONDAY_START), 2);
        assert_eq!(
            expand_dynamic_dates("{{index}}", date(2024, 3, 15), MONDAY_START, "YYYY-MM-DD"),
            "11"
        );
    }

    #[test]
    fn dynamic_detection_requires_both_braces() {
        assert!(is_dynamic("{{date}}"));
        assert!(is_dynamic("a {{ x }} b"));
        assert!(!is_dynamic("{{date"));
        assert!(!is_dynamic("date}}"));
        assert!(!is_dynamic("plain"));
    }
}

//! Week classifier.
//!
//! # Responsibility
//! - Classify a generated week as past, present or future relative to an
//!   explicitly supplied "as-of" date.
//!
//! # Invariants
//! - `today` is an argument, not ambient state; the collaborator refreshes
//!   it once per render pass so all classifications in that pass agree.
//! - Callers pass week starts produced by the generator; the same
//!   week-start rule is applied to both sides of the comparison.

use crate::calendar::start_of_week;
use crate::model::week::WeekStatus;
use crate::model::week_start::WeekStartDay;
use chrono::NaiveDate;

/// Classifies one week relative to `today`.
///
/// # Contract
/// - `Present` iff the calendar week of `week_start` (under the same
///   week-start rule) contains `today`.
/// - Otherwise `Past` iff `week_start < today`, else `Future`.
pub fn classify_week(
    week_start: NaiveDate,
    week_start_day: WeekStartDay,
    today: NaiveDate,
) -> WeekStatus {
    let day = week_start_day.resolve();
    let this_week = start_of_week(week_start, day);
    let today_week = start_of_week(today, day);

    match (this_week, today_week) {
        (Some(a), Some(b)) if a == b => WeekStatus::Present,
        _ if week_start < today => WeekStatus::Past,
        _ => WeekStatus::Future,
    }
}

#[cfg(test)]
mod tests {
    use super::classify_week;
    use crate::model::week::WeekStatus;
    use crate::model::week_start::WeekStartDay;
    use chrono::{NaiveDate, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    const MONDAY_START: WeekStartDay = WeekStartDay::Day(Weekday::Mon);

    #[test]
    fn week_containing_today_is_present() {
        // 2024-03-11 is a Monday; 2024-03-15 falls inside that week.
        let status = classify_week(date(2024, 3, 11), MONDAY_START, date(2024, 3, 15));
        assert_eq!(status, WeekStatus::Present);
    }

    #[test]
    fn earlier_week_is_past_and_later_week_is_future() {
        let today = date(2024, 3, 15);
        assert_eq!(
            classify_week(date(2024, 3, 4), MONDAY_START, today),
            WeekStatus::Past
        );
        assert_eq!(
            classify_week(date(2024, 3, 18), MONDAY_START, today),
            WeekStatus::Future
        );
    }

    #[test]
    fn present_holds_on_the_first_and_last_day_of_the_week() {
        let monday = date(2024, 3, 11);
        assert_eq!(
            classify_week(monday, MONDAY_START, monday),
            WeekStatus::Present
        );
        assert_eq!(
            classify_week(monday, MONDAY_START, date(2024, 3, 17)),
            WeekStatus::Present
        );
        assert_eq!(
            classify_week(monday, MONDAY_START, date(2024, 3, 18)),
            WeekStatus::Past
        );
    }
}

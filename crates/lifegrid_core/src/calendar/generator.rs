//! Calendar generator.
//!
//! # Responsibility
//! - Derive the birth week, death date, death week and the full ordered
//!   week sequence from a validated `CalendarSpec`.
//! - Downgrade internal date-math failures to a renderable empty result.
//!
//! # Invariants
//! - Consecutive weeks differ by exactly seven days and carry strictly
//!   sequential 0-based indices.
//! - A birth and death date falling in the same week still yields one week.
//! - This boundary never propagates a date-math error to the host; a
//!   degraded `has_weeks = false` result is returned instead.

use crate::calendar::{add_years, enumerate_week_starts, start_of_week, DateMathError};
use crate::model::week::{CalendarData, CalendarSpec, Week};
use chrono::NaiveDate;
use log::error;

/// Generates the full lifespan week sequence for one spec.
///
/// # Contract
/// - `weeks[0].start_date` equals the birth week start.
/// - The sequence covers the birth week through the death week inclusive,
///   with 52 or 53 entries per year as the calendar dictates.
/// - On internal failure the result has `has_weeks = false`, an empty
///   `weeks` list, and the derived date fields fall back to `birth_date`.
pub fn generate_calendar(spec: &CalendarSpec) -> CalendarData {
    match build_weeks(spec) {
        Ok((birth_week_start, death_date, death_week_start, weeks)) => CalendarData {
            birth_date: spec.birth_date,
            lifespan_years: spec.lifespan_years,
            week_start_day: spec.week_start_day,
            birth_week_start,
            death_date,
            death_week_start,
            weeks,
            has_weeks: true,
        },
        Err(err) => {
            error!(
                "event=calendar_degraded module=calendar status=error birth_date={} lifespan_years={} reason={err}",
                spec.birth_date, spec.lifespan_years
            );
            CalendarData {
                birth_date: spec.birth_date,
                lifespan_years: spec.lifespan_years,
                week_start_day: spec.week_start_day,
                birth_week_start: spec.birth_date,
                death_date: spec.birth_date,
                death_week_start: spec.birth_date,
                weeks: Vec::new(),
                has_weeks: false,
            }
        }
    }
}

type WeekPlan = (NaiveDate, NaiveDate, NaiveDate, Vec<Week>);

fn build_weeks(spec: &CalendarSpec) -> Result<WeekPlan, DateMathError> {
    let week_start_day = spec.week_start_day.resolve();

    let birth_week_start =
        start_of_week(spec.birth_date, week_start_day).ok_or(DateMathError::Overflow)?;
    let death_date = add_years(spec.birth_date, spec.lifespan_years).ok_or(DateMathError::Overflow)?;
    let death_week_start = start_of_week(death_date, week_start_day).ok_or(DateMathError::Overflow)?;

    let weeks = enumerate_week_starts(birth_week_start, death_week_start)?
        .into_iter()
        .enumerate()
        .map(|(index, start_date)| Week {
            index: index as u32,
            start_date,
        })
        .collect();

    Ok((birth_week_start, death_date, death_week_start, weeks))
}

#[cfg(test)]
mod tests {
    use super::generate_calendar;
    use crate::model::week::CalendarSpec;
    use crate::model::week_start::WeekStartDay;
    use chrono::{Datelike, NaiveDate, Weekday};

    fn spec(birth: NaiveDate, lifespan: u16, week_start: WeekStartDay) -> CalendarSpec {
        CalendarSpec {
            birth_date: birth,
            lifespan_years: lifespan,
            week_start_day: week_start,
        }
    }

    #[test]
    fn head_of_sequence_is_the_birth_week() {
        let birth = NaiveDate::from_ymd_opt(1990, 6, 20).expect("valid date");
        let data = generate_calendar(&spec(birth, 1, WeekStartDay::Day(Weekday::Mon)));

        assert!(data.has_weeks);
        assert_eq!(data.weeks[0].start_date, data.birth_week_start);
        assert_eq!(data.birth_week_start.weekday(), Weekday::Mon);
        assert!(data.birth_week_start <= birth);
    }

    #[test]
    fn degraded_result_on_calendar_overflow() {
        let data = generate_calendar(&spec(NaiveDate::MAX, 1, WeekStartDay::Unspecified));

        assert!(!data.has_weeks);
        assert!(data.weeks.is_empty());
        assert_eq!(data.death_date, NaiveDate::MAX);
    }
}

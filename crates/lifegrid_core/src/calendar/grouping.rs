//! Year-grouping engine for the decade-style rendering mode.
//!
//! # Responsibility
//! - Subdivide a lifespan into calendar-accurate buckets of consecutive
//!   weeks, each spanning a group-size worth of years.
//!
//! # Invariants
//! - Group spans are recomputed from real calendar years per group, never
//!   sliced from a flat master list, so each group's week count reflects
//!   that span's true 52/53-week structure.
//! - Every group boundary stays on the configured week grid: interior
//!   boundaries snap to the start of the week containing the year mark,
//!   and the final group runs through the death week, so the union of all
//!   groups equals the flat enumeration week for week.
//! - Week indices restart at 0 inside every group and `start_date` values
//!   are strictly increasing within it.
//! - A zero group size is a caller contract violation and fails fast on
//!   the strict entry point; internal overflow degrades to an empty group
//!   list on the fail-soft entry point.

use crate::calendar::{add_years, enumerate_week_starts, start_of_week, DateMathError};
use crate::model::week::{CalendarSpec, Week, YearGroup};
use chrono::Days;
use log::error;

/// Years covered by one group in the default decade-style display.
pub const DEFAULT_GROUP_SIZE_YEARS: u16 = 10;

/// Groups the lifespan into decade buckets, degrading to an empty list on
/// internal date-math failure.
///
/// This is the presentation-facing entry point; it has no programmatic
/// degrees of freedom, so every failure it can hit is internal and is
/// logged and downgraded rather than propagated.
pub fn generate_year_groups(spec: &CalendarSpec) -> Vec<YearGroup> {
    match build_groups(spec, DEFAULT_GROUP_SIZE_YEARS) {
        Ok(groups) => groups,
        Err(err) => {
            error!(
                "event=grouping_degraded module=calendar status=error birth_date={} lifespan_years={} reason={err}",
                spec.birth_date, spec.lifespan_years
            );
            Vec::new()
        }
    }
}

/// Groups the lifespan using a caller-chosen group size.
///
/// # Errors
/// - `ZeroGroupSize` when `group_size_years == 0` (contract violation).
/// - `Overflow` when the span leaves the representable calendar range.
pub fn try_year_groups(
    spec: &CalendarSpec,
    group_size_years: u16,
) -> Result<Vec<YearGroup>, DateMathError> {
    if group_size_years == 0 {
        return Err(DateMathError::ZeroGroupSize);
    }
    build_groups(spec, group_size_years)
}

fn build_groups(
    spec: &CalendarSpec,
    group_size_years: u16,
) -> Result<Vec<YearGroup>, DateMathError> {
    let week_start_day = spec.week_start_day.resolve();
    let birth_week_start =
        start_of_week(spec.birth_date, week_start_day).ok_or(DateMathError::Overflow)?;
    let death_date =
        add_years(spec.birth_date, spec.lifespan_years).ok_or(DateMathError::Overflow)?;
    let death_week_start =
        start_of_week(death_date, week_start_day).ok_or(DateMathError::Overflow)?;

    let mut groups = Vec::new();
    let mut current_start = birth_week_start;
    let mut years_left = spec.lifespan_years;

    while years_left > 0 {
        let span_years = years_left.min(group_size_years);
        years_left -= span_years;

        // Interior boundaries snap to the week containing the year mark so
        // the next group stays on the same week grid; the final group runs
        // through the death week like the flat enumeration does.
        let (current_end, next_start) = if years_left == 0 {
            (death_week_start, death_week_start)
        } else {
            let span_end = add_years(current_start, span_years).ok_or(DateMathError::Overflow)?;
            let next_start =
                start_of_week(span_end, week_start_day).ok_or(DateMathError::Overflow)?;
            let current_end = next_start
                .checked_sub_days(Days::new(7))
                .ok_or(DateMathError::Overflow)?;
            (current_end, next_start)
        };

        let weeks = enumerate_week_starts(current_start, current_end)?
            .into_iter()
            .enumerate()
            .map(|(index, start_date)| Week {
                index: index as u32,
                start_date,
            })
            .collect();
        groups.push(YearGroup { weeks });

        current_start = next_start;
    }

    Ok(groups)
}

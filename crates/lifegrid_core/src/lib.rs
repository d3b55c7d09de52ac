//! Core calendar/week computation engine for the LifeGrid week-grid view.
//! This crate is the single source of truth for week-boundary invariants.

pub mod calendar;
pub mod codec;
pub mod index;
pub mod logging;
pub mod model;
pub mod settings;
pub mod source;

pub use calendar::classify::classify_week;
pub use calendar::generator::generate_calendar;
pub use calendar::grouping::{generate_year_groups, try_year_groups, DEFAULT_GROUP_SIZE_YEARS};
pub use calendar::{add_years, enumerate_week_starts, start_of_week, DateMathError};
pub use codec::pattern::{extract_format_from_pattern, format_date_tokens, DEFAULT_DATE_FORMAT};
pub use codec::template::{expand_dynamic_dates, is_dynamic};
pub use codec::week_key::{
    format_week_key, local_utc_offset, parse_local_date, parse_week_key_date, CodecError,
    WEEK_KEY_PREFIX,
};
pub use index::reconcile::{correct_week_key, has_note_for_week, reconcile_note_index, NoteIndex};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::week::{CalendarData, CalendarSpec, Week, WeekStatus, YearGroup};
pub use model::week_start::WeekStartDay;
pub use settings::{
    normalize_settings, validate_lifespan, RawCalendarSettings, DEFAULT_LIFESPAN_YEARS,
    MAX_LIFESPAN_YEARS, MIN_LIFESPAN_YEARS,
};
pub use source::{NotesSourceAdapter, NotesSourceConfig};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

use chrono::{NaiveDate, Weekday};
use lifegrid_core::{
    expand_dynamic_dates, extract_format_from_pattern, format_date_tokens, is_dynamic,
    WeekStartDay, DEFAULT_DATE_FORMAT,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

const MONDAY_START: WeekStartDay = WeekStartDay::Day(Weekday::Mon);

#[test]
fn date_placeholders_expand_per_their_format() {
    let d = date(2024, 3, 15);
    assert_eq!(
        expand_dynamic_dates("{{date:YYYY}}", d, MONDAY_START, DEFAULT_DATE_FORMAT),
        "2024"
    );
    assert_eq!(
        expand_dynamic_dates("{{date}}", d, MONDAY_START, DEFAULT_DATE_FORMAT),
        "2024-03-15"
    );
}

#[test]
fn mixed_literal_and_placeholder_text_expands_in_place() {
    let out = expand_dynamic_dates(
        "notes/{{date:YYYY}}/W{{date:WW}} ({{start_date}} to {{end_date}})",
        date(2024, 3, 15),
        MONDAY_START,
        DEFAULT_DATE_FORMAT,
    );
    assert_eq!(out, "notes/2024/W11 (2024-03-11 to 2024-03-17)");
}

#[test]
fn week_index_placeholder_is_one_based() {
    let out = expand_dynamic_dates(
        "week {{index}} of the year",
        date(2024, 1, 3),
        MONDAY_START,
        DEFAULT_DATE_FORMAT,
    );
    assert_eq!(out, "week 1 of the year");
}

#[test]
fn pattern_extraction_wraps_literals_as_quoted_segments() {
    assert_eq!(
        extract_format_from_pattern("Weekly-{{date:GGGG-[W]WW}}"),
        "[Weekly-]GGGG-[W]WW"
    );
    assert_eq!(extract_format_from_pattern("YYYY-WW"), "[YYYY-WW]");
}

#[test]
fn token_formatter_covers_the_external_vocabulary() {
    let d = date(2024, 3, 15);
    assert_eq!(format_date_tokens(d, "GGGG-[W]WW"), "2024-W11");
    assert_eq!(format_date_tokens(d, "YYYY-MM-DD"), "2024-03-15");
    assert_eq!(format_date_tokens(d, "[YYYY-MM-DD]"), "YYYY-MM-DD");
}

#[test]
fn dynamic_detection_needs_opening_and_closing_braces() {
    assert!(is_dynamic("{{date:YYYY}}"));
    assert!(!is_dynamic("GGGG-[W]WW"));
    assert!(!is_dynamic("{{date:YYYY"));
}

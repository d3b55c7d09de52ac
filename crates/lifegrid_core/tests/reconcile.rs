use chrono::{FixedOffset, NaiveDate, Weekday};
use lifegrid_core::{
    correct_week_key, format_week_key, has_note_for_week, reconcile_note_index, NoteIndex,
    WeekStartDay,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).expect("valid offset")
}

const MONDAY_START: WeekStartDay = WeekStartDay::Day(Weekday::Mon);

#[test]
fn wednesday_key_shifts_to_the_next_monday() {
    // 2024-01-10 is a Wednesday; the producer indexed it under a
    // Wednesday week start while the viewer is configured for Monday.
    let stale = format_week_key(date(2024, 1, 10), utc());
    let corrected = correct_week_key(&stale, MONDAY_START, utc()).expect("well-formed key");
    assert_eq!(corrected, format_week_key(date(2024, 1, 15), utc()));
}

#[test]
fn unspecified_week_start_leaves_keys_untouched() {
    let stale = format_week_key(date(2024, 1, 10), utc());
    let out = correct_week_key(&stale, WeekStartDay::Unspecified, utc()).expect("well-formed key");
    assert_eq!(out, stale);
}

#[test]
fn already_aligned_keys_are_unchanged() {
    let aligned = format_week_key(date(2024, 1, 15), utc());
    let out = correct_week_key(&aligned, MONDAY_START, utc()).expect("well-formed key");
    assert_eq!(out, aligned);
}

#[test]
fn every_stale_weekday_lands_on_the_configured_start_day() {
    // Week of 2024-01-08 (Monday) through 2024-01-14 (Sunday).
    for day in 8..=14 {
        let stale = format_week_key(date(2024, 1, day), utc());
        let corrected = correct_week_key(&stale, MONDAY_START, utc()).expect("well-formed key");
        let expected = if day == 8 { 8 } else { 15 };
        assert_eq!(
            corrected,
            format_week_key(date(2024, 1, expected), utc()),
            "stale day {day}"
        );
    }
}

#[test]
fn reconciliation_rekeys_the_whole_index_and_keeps_handles() {
    let mut index: NoteIndex<&str> = NoteIndex::new();
    index.insert(format_week_key(date(2024, 1, 10), utc()), "wed.md");
    index.insert(format_week_key(date(2024, 1, 15), utc()), "mon.md");

    let corrected = reconcile_note_index(index, MONDAY_START, utc()).expect("well-formed index");

    // Both keys collapse onto Mondays; the Wednesday entry moved forward.
    assert_eq!(corrected.len(), 1);
    assert!(corrected.contains_key(&format_week_key(date(2024, 1, 15), utc())));
}

#[test]
fn reconciliation_preserves_distinct_weeks() {
    let mut index: NoteIndex<u32> = NoteIndex::new();
    index.insert(format_week_key(date(2024, 1, 10), utc()), 1);
    index.insert(format_week_key(date(2024, 1, 17), utc()), 2);

    let corrected = reconcile_note_index(index, MONDAY_START, utc()).expect("well-formed index");

    assert_eq!(corrected.len(), 2);
    assert_eq!(
        corrected.get(&format_week_key(date(2024, 1, 15), utc())),
        Some(&1)
    );
    assert_eq!(
        corrected.get(&format_week_key(date(2024, 1, 22), utc())),
        Some(&2)
    );
}

#[test]
fn malformed_index_keys_fail_fast() {
    let mut index: NoteIndex<&str> = NoteIndex::new();
    index.insert("not-a-week-key".to_string(), "x.md");
    assert!(reconcile_note_index(index, MONDAY_START, utc()).is_err());
}

#[test]
fn note_lookup_uses_the_canonical_key() {
    let mut index: NoteIndex<&str> = NoteIndex::new();
    index.insert(format_week_key(date(2024, 1, 15), utc()), "mon.md");

    assert!(has_note_for_week(&index, date(2024, 1, 15), utc()));
    assert!(!has_note_for_week(&index, date(2024, 1, 22), utc()));
}

//! Filename-pattern format extraction and date-token formatting.
//!
//! # Responsibility
//! - Turn a filename pattern mixing literal text with one
//!   `{{date:FORMAT}}` segment into a single parseable format string, with
//!   the literal parts bracket-quoted.
//! - Format dates against the external naming conventions' token
//!   vocabulary (`YYYY`, `MM`, `DD`, `GGGG`, `WW`, `[literal]`, ...),
//!   which the date library's strftime does not speak.
//!
//! # Invariants
//! - A pattern with no dynamic segment is bracket-wrapped wholesale; it
//!   can never match a real date, so parsing it against filenames
//!   correctly yields no matches.
//! - Bracket-quoted text passes through the formatter untouched.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Format applied when a dynamic segment omits its own.
pub const DEFAULT_DATE_FORMAT: &str = "YYYY-MM-DD";

static DATE_SEGMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*date\s*(?::\s*([^}]*?)\s*)?\}\}").expect("valid date segment regex")
});

/// Extracts the date format embedded in a filename pattern.
///
/// Literal text before/after the single `{{date:FORMAT}}` segment is
/// re-wrapped in brackets so the result is one parseable format string:
/// `"Weekly-{{date:GGGG-[W]WW}}"` becomes `"[Weekly-]GGGG-[W]WW"`. A
/// pattern with no dynamic segment is wrapped wholesale. A bare `{{date}}`
/// segment contributes [`DEFAULT_DATE_FORMAT`].
pub fn extract_format_from_pattern(pattern: &str) -> String {
    let Some(caps) = DATE_SEGMENT_RE.captures(pattern) else {
        return format!("[{pattern}]");
    };
    let (segment_start, segment_end) = caps
        .get(0)
        .map(|m| (m.start(), m.end()))
        .unwrap_or((0, pattern.len()));
    let format = caps
        .get(1)
        .map(|m| m.as_str())
        .filter(|text| !text.is_empty())
        .unwrap_or(DEFAULT_DATE_FORMAT);

    let mut result = String::new();
    let before = &pattern[..segment_start];
    if !before.is_empty() {
        result.push_str(&format!("[{before}]"));
    }
    result.push_str(format);
    let after = &pattern[segment_end..];
    if !after.is_empty() {
        result.push_str(&format!("[{after}]"));
    }
    result
}

/// Formats a date against the external token vocabulary.
///
/// Supported tokens: `YYYY`/`YY` calendar year, `MM`/`M` month, `DD`/`D`
/// day of month, `GGGG`/`GG` ISO week-based year, `WW`/`W` ISO week
/// number. `[...]` spans are emitted literally without the brackets; any
/// other character is copied through.
pub fn format_date_tokens(date: NaiveDate, format: &str) -> String {
    let mut out = String::with_capacity(format.len());
    let mut rest = format;

    while !rest.is_empty() {
        if let Some(after_open) = rest.strip_prefix('[') {
            match after_open.find(']') {
                Some(close) => {
                    out.push_str(&after_open[..close]);
                    rest = &after_open[close + 1..];
                }
                None => {
                    // Unterminated literal: emit verbatim and stop scanning.
                    out.push_str(after_open);
                    rest = "";
                }
            }
            continue;
        }

        let mut matched = false;
        for (token, value) in token_table(date) {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(&value);
                rest = tail;
                matched = true;
                break;
            }
        }
        if matched {
            continue;
        }

        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            out.push(ch);
        }
        rest = chars.as_str();
    }

    out
}

/// Token expansions ordered longest-first so `GGGG` wins over `GG`.
fn token_table(date: NaiveDate) -> [(&'static str, String); 10] {
    let iso = date.iso_week();
    [
        ("GGGG", format!("{:04}", iso.year())),
        ("YYYY", format!("{:04}", date.year())),
        ("GG", format!("{:02}", iso.year().rem_euclid(100))),
        ("YY", format!("{:02}", date.year().rem_euclid(100))),
        ("MM", format!("{:02}", date.month())),
        ("DD", format!("{:02}", date.day())),
        ("WW", format!("{:02}", iso.week())),
        ("M", date.month().to_string()),
        ("D", date.day().to_string()),
        ("W", iso.week().to_string()),
    ]
}

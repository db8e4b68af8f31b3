//! Lenient fallback date parsing for free-text "Date" lines.
//!
//! Shift reports that skip the "7th January 2025" phrasing usually carry a
//! labelled date line instead, in whatever format the author typed that
//! day. This module parses those lines with an ordered table of patterns,
//! day-first for ambiguous numeric forms, filling fields the text does not
//! determine from a caller-supplied default date.

use chrono::{Datelike, NaiveDate};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Full English month names, 1-indexed by position.
pub(crate) const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Map a month name to its 1-indexed number.
///
/// Accepts the full English name, the 3-letter abbreviation, or "sept",
/// case-insensitive. Anything else is `None`.
#[must_use]
pub(crate) fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    if lower.len() < 3 {
        return None;
    }
    for (idx, month) in MONTHS.iter().enumerate() {
        let number = u32::try_from(idx + 1).ok()?;
        if lower == *month || lower == month[..3] || (lower == "sept" && number == 9) {
            return Some(number);
        }
    }
    None
}

/// How to interpret the capture groups of a lenient pattern.
#[derive(Debug, Clone, Copy)]
enum DateKind {
    /// (year, month, day), ISO-ish numeric.
    Ymd,
    /// (day, month, 4-digit year), day-first with swap leniency.
    Dmy,
    /// (day, month, 2-digit year), day-first with swap leniency.
    Dmy2,
    /// (day, month-name, optional year).
    DayMonth,
    /// (month-name, day, optional year).
    MonthDay,
    /// (month-name, year); day from the default.
    MonthYear,
    /// (day, month), no year; day-first with swap leniency.
    DayMonthNumeric,
    /// (year) alone; month and day from the default.
    Year,
}

/// Ordered pattern table, tried first-match-wins. ISO before day-first so a
/// leading 4-digit year is never read as a day; name-based forms before the
/// bare numeric pair so "7 March" is not consumed as "7" alone.
static LENIENT_PATTERNS: LazyLock<Vec<(Regex, DateKind)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r"\b(\d{4})[./\-](\d{1,2})[./\-](\d{1,2})\b").expect("valid ymd regex"),
            DateKind::Ymd,
        ),
        (
            Regex::new(r"\b(\d{1,2})[./\-](\d{1,2})[./\-](\d{4})\b").expect("valid dmy regex"),
            DateKind::Dmy,
        ),
        (
            Regex::new(r"\b(\d{1,2})[./\-](\d{1,2})[./\-](\d{2})\b").expect("valid dmy2 regex"),
            DateKind::Dmy2,
        ),
        (
            Regex::new(r"(?i)\b(\d{1,2})(?:st|nd|rd|th)?\s+([A-Za-z]{3,})\b\.?,?\s*(\d{4})?")
                .expect("valid day month regex"),
            DateKind::DayMonth,
        ),
        (
            Regex::new(r"(?i)\b([A-Za-z]{3,})\.?\s+(\d{1,2})(?:st|nd|rd|th)?\b,?\s*(\d{4})?")
                .expect("valid month day regex"),
            DateKind::MonthDay,
        ),
        (
            Regex::new(r"(?i)\b([A-Za-z]{3,})\.?,?\s+(\d{4})\b").expect("valid month year regex"),
            DateKind::MonthYear,
        ),
        (
            Regex::new(r"\b(\d{1,2})[./\-](\d{1,2})\b").expect("valid day month numeric regex"),
            DateKind::DayMonthNumeric,
        ),
        (
            Regex::new(r"\b(\d{4})\b").expect("valid bare year regex"),
            DateKind::Year,
        ),
    ]
});

/// Parse free text as a date, leniently.
///
/// Patterns are tried in table order; within a pattern, every match in the
/// text is considered left to right and the first that resolves to a valid
/// calendar date wins (so "Mon 32/13 7 March" still finds the 7th of
/// March). Ambiguous numeric pairs read day-first; if that reading is not
/// a valid date but the swapped one is, the swapped reading is used.
/// Returns `None` when nothing in the text resolves.
#[must_use]
pub fn parse_lenient(text: &str, default: NaiveDate) -> Option<NaiveDate> {
    for (pattern, kind) in LENIENT_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            if let Some(date) = resolve(&caps, *kind, default) {
                return Some(date);
            }
        }
    }
    None
}

/// Build a date from one pattern match, or `None` if the captured numbers
/// do not form a valid calendar date.
fn resolve(caps: &Captures<'_>, kind: DateKind, default: NaiveDate) -> Option<NaiveDate> {
    match kind {
        DateKind::Ymd => {
            let year: i32 = caps.get(1)?.as_str().parse().ok()?;
            let month: u32 = caps.get(2)?.as_str().parse().ok()?;
            let day: u32 = caps.get(3)?.as_str().parse().ok()?;
            NaiveDate::from_ymd_opt(year, month, day)
        }
        DateKind::Dmy => {
            let day: u32 = caps.get(1)?.as_str().parse().ok()?;
            let month: u32 = caps.get(2)?.as_str().parse().ok()?;
            let year: i32 = caps.get(3)?.as_str().parse().ok()?;
            day_first(year, month, day)
        }
        DateKind::Dmy2 => {
            let day: u32 = caps.get(1)?.as_str().parse().ok()?;
            let month: u32 = caps.get(2)?.as_str().parse().ok()?;
            let short: i32 = caps.get(3)?.as_str().parse().ok()?;
            day_first(expand_two_digit_year(short), month, day)
        }
        DateKind::DayMonth => {
            let day: u32 = caps.get(1)?.as_str().parse().ok()?;
            let month = month_number(caps.get(2)?.as_str())?;
            let year = captured_year(caps, 3, default);
            NaiveDate::from_ymd_opt(year, month, day)
        }
        DateKind::MonthDay => {
            let month = month_number(caps.get(1)?.as_str())?;
            let day: u32 = caps.get(2)?.as_str().parse().ok()?;
            let year = captured_year(caps, 3, default);
            NaiveDate::from_ymd_opt(year, month, day)
        }
        DateKind::MonthYear => {
            let month = month_number(caps.get(1)?.as_str())?;
            let year: i32 = caps.get(2)?.as_str().parse().ok()?;
            NaiveDate::from_ymd_opt(year, month, default.day())
                .or_else(|| NaiveDate::from_ymd_opt(year, month, 1))
        }
        DateKind::DayMonthNumeric => {
            let day: u32 = caps.get(1)?.as_str().parse().ok()?;
            let month: u32 = caps.get(2)?.as_str().parse().ok()?;
            day_first(default.year(), month, day)
        }
        DateKind::Year => {
            let year: i32 = caps.get(1)?.as_str().parse().ok()?;
            NaiveDate::from_ymd_opt(year, default.month(), default.day())
        }
    }
}

/// Day-first reading of a numeric pair, swapping day and month when only
/// the swapped reading is a valid date (dateutil-compatible leniency).
fn day_first(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| NaiveDate::from_ymd_opt(year, day, month))
}

/// Two-digit years: 69-99 map to the 1900s, 00-68 to the 2000s.
fn expand_two_digit_year(short: i32) -> i32 {
    if short >= 69 {
        1900 + short
    } else {
        2000 + short
    }
}

fn captured_year(caps: &Captures<'_>, group: usize, default: NaiveDate) -> i32 {
    caps.get(group)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or_else(|| default.year())
}

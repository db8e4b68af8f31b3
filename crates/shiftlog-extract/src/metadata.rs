//! Metadata extractor: work date and signatories from full document text.

use crate::dates;
use crate::text::collapse_spaces;
use chrono::NaiveDate;
use regex::Regex;
use shiftlog_core::{ReportMetadata, Result, ShiftlogError};
use std::sync::LazyLock;

/// `Signed (Supervisor) <name>` — name is letters, spaces, apostrophes,
/// and hyphens, starting with a letter.
static SUPERVISOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Signed\s*\(Supervisor\)\s*([A-Za-z][A-Za-z '\-]+)")
        .expect("valid supervisor signature regex")
});

/// `Signed (Superintendent) <name>`, same name shape as the supervisor.
static SUPERINTENDENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Signed\s*\(Superintendent\)\s*([A-Za-z][A-Za-z '\-]+)")
        .expect("valid superintendent signature regex")
});

/// Primary work-date phrasing: "7th January", "7 January 2025". Day with
/// optional ordinal suffix, full month name, optional 4-digit year.
static DAY_MONTH_YEAR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(\d{1,2})(?:st|nd|rd|th)?\s+(January|February|March|April|May|June|July|August|September|October|November|December)\b(?:\s+(\d{4}))?",
    )
    .expect("valid day month year regex")
});

/// Fallback: the word `Date` followed by the rest of its line or the next
/// line, parsed leniently.
static DATE_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bDate\b\s*\n?\s*([^\n]+)").expect("valid date line regex"));

/// Extract the work date and both signatories from full document text.
///
/// Names are extracted independently with no fallback: a missing signature
/// is an empty string. The date follows a three-step chain:
///
/// 1. The primary "`<day>[ordinal] <Month> [<year>]`" phrasing; the year
///    defaults to `assumed_year` when absent. An out-of-range combination
///    (e.g. "31st February") is an [`ShiftlogError::InvalidWorkDate`] and
///    propagates — it is a whole-document failure, not retried here.
/// 2. A labelled `Date` line, parsed with the lenient day-first parser in
///    [`crate::dates`], defaulting unknown fields to January 1 of
///    `assumed_year`.
/// 3. January 1 of `assumed_year`.
///
/// # Errors
///
/// Returns [`ShiftlogError::InvalidWorkDate`] when step 1 matches an
/// impossible calendar date (and, pathologically, when `assumed_year`
/// itself is outside the representable range).
pub fn extract_metadata(text: &str, assumed_year: i32) -> Result<ReportMetadata> {
    let supervisor = signature(&SUPERVISOR_REGEX, text);
    let superintendent = signature(&SUPERINTENDENT_REGEX, text);
    let work_date = extract_work_date(text, assumed_year)?;

    Ok(ReportMetadata {
        work_date,
        supervisor,
        superintendent,
    })
}

fn signature(pattern: &Regex, text: &str) -> String {
    pattern
        .captures(text)
        .map(|caps| collapse_spaces(&caps[1]))
        .unwrap_or_default()
}

fn extract_work_date(text: &str, assumed_year: i32) -> Result<NaiveDate> {
    if let Some(caps) = DAY_MONTH_YEAR_REGEX.captures(text) {
        // The captures are all-digit / month-name alternation, so the
        // parses cannot fail; 0 keeps the invalid-date path honest.
        let day: u32 = caps[1].parse().unwrap_or(0);
        let month = dates::month_number(&caps[2]).unwrap_or(0);
        let year: i32 = caps
            .get(3)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(assumed_year);

        return NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(ShiftlogError::InvalidWorkDate { year, month, day });
    }

    let default = default_date(assumed_year)?;

    if let Some(caps) = DATE_LINE_REGEX.captures(text) {
        let line = caps[1].trim();
        if let Some(date) = dates::parse_lenient(line, default) {
            return Ok(date);
        }
        log::debug!("date line {line:?} matched no lenient pattern, using default");
    }

    Ok(default)
}

/// January 1 of the assumed year, the last-resort work date.
fn default_date(assumed_year: i32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(assumed_year, 1, 1).ok_or(ShiftlogError::InvalidWorkDate {
        year: assumed_year,
        month: 1,
        day: 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_primary_date_with_year_ignores_assumed_year() {
        let meta = extract_metadata("work on 7th January 2024 went fine", 2030).unwrap();
        assert_eq!(meta.work_date, date(2024, 1, 7));
    }

    #[test]
    fn test_primary_date_without_year_uses_assumed_year() {
        let meta = extract_metadata("7 January", 2025).unwrap();
        assert_eq!(meta.work_date, date(2025, 1, 7));
    }

    #[test]
    fn test_primary_date_case_insensitive_ordinal_and_month() {
        let meta = extract_metadata("22ND FEBRUARY", 2025).unwrap();
        assert_eq!(meta.work_date, date(2025, 2, 22));
    }

    #[test]
    fn test_primary_date_out_of_range_propagates() {
        let err = extract_metadata("31st February 2024", 2024).unwrap_err();
        match err {
            ShiftlogError::InvalidWorkDate { year, month, day } => {
                assert_eq!((year, month, day), (2024, 2, 31));
            }
            other => panic!("expected InvalidWorkDate, got {other}"),
        }
    }

    #[test]
    fn test_fallback_date_line_next_line() {
        let meta = extract_metadata("Date\n03/04/2025\nrest", 2020).unwrap();
        assert_eq!(meta.work_date, date(2025, 4, 3));
    }

    #[test]
    fn test_fallback_date_line_same_line() {
        let meta = extract_metadata("Date 03/04/2025", 2020).unwrap();
        assert_eq!(meta.work_date, date(2025, 4, 3));
    }

    #[test]
    fn test_fallback_fills_year_from_assumed() {
        let meta = extract_metadata("Date\n7/3", 2025).unwrap();
        assert_eq!(meta.work_date, date(2025, 3, 7));
    }

    #[test]
    fn test_updated_does_not_trigger_fallback() {
        // "Updated" contains "date" but is not the labelled Date line.
        let meta = extract_metadata("Updated 03/04/2025 by ops", 2021).unwrap();
        assert_eq!(meta.work_date, date(2021, 1, 1));
    }

    #[test]
    fn test_last_resort_january_first() {
        let meta = extract_metadata("no dates here at all", 2025).unwrap();
        assert_eq!(meta.work_date, date(2025, 1, 1));
    }

    #[test]
    fn test_unparseable_date_line_uses_default() {
        let meta = extract_metadata("Date\nTBC by office", 2025).unwrap();
        assert_eq!(meta.work_date, date(2025, 1, 1));
    }

    #[test]
    fn test_supervisor_name_collapsed() {
        let meta = extract_metadata("Signed (Supervisor)   John   O'Brien\nDate", 2025).unwrap();
        assert_eq!(meta.supervisor, "John O'Brien");
        assert_eq!(meta.superintendent, "");
    }

    #[test]
    fn test_superintendent_with_hyphen() {
        let meta =
            extract_metadata("signed (superintendent) Anna-Maria da Silva", 2025).unwrap();
        assert_eq!(meta.superintendent, "Anna-Maria da Silva");
    }

    #[test]
    fn test_both_signatures_independent() {
        let text = "Signed (Supervisor) Ana Costa\nSigned (Superintendent) Rui Melo\n7 January";
        let meta = extract_metadata(text, 2025).unwrap();
        assert_eq!(meta.supervisor, "Ana Costa");
        assert_eq!(meta.superintendent, "Rui Melo");
        assert_eq!(meta.work_date, date(2025, 1, 7));
    }

    #[test]
    fn test_missing_signatures_empty_not_error() {
        let meta = extract_metadata("7 January", 2025).unwrap();
        assert_eq!(meta.supervisor, "");
        assert_eq!(meta.superintendent, "");
    }
}

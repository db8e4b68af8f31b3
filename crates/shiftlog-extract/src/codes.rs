//! Equipment-code / work-item extractor.
//!
//! The task section of a shift report lists repeating groups of one
//! equipment code followed by the work items done on it. Codes are written
//! inconsistently ("1 HNX 10 ST", "1HK-10SE", "1HDD0BST"), so the pattern
//! tolerates optional spaces and an optional hyphen before the 2-character
//! block and the extractor normalizes every spelling to the same
//! uppercase, separator-free form.

use crate::text::collapse_spaces;
use regex::Regex;
use shiftlog_core::{EquipmentCode, ExtractedRow, WorkItem};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Equipment code: digit, 2-3 letters, optional space-or-hyphen, 2
/// alphanumerics, 2 letters, word-bounded, any case.
static EQUIPMENT_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d)\s*([A-Za-z]{2,3})\s*[- ]?\s*([0-9A-Za-z]{2})\s*([A-Za-z]{2})\b")
        .expect("valid equipment code regex")
});

/// Work item: 4 digits, optionally `.` and one more digit.
static WORK_ITEM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{4}(?:\.\d)?\b").expect("valid work item regex"));

/// Start of the task zone; the apostrophe may be straight or curly.
static ZONE_START_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Today[’']?s\s+Tasks").expect("valid zone start regex"));

/// End of the task zone.
static ZONE_END_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bManpower\b").expect("valid zone end regex"));

/// One code occurrence inside the zone, with its match span.
struct CodeMatch {
    code: EquipmentCode,
    start: usize,
    end: usize,
}

/// Clip the text to the task zone to cut false positives from unrelated
/// sections (manpower counts, plant registers).
///
/// The zone starts at the first `Today's Tasks` (or position 0 when the
/// heading is absent) and ends at the first whole-word `Manpower` at or
/// after that start (or the end of the text).
#[must_use]
pub fn clip_task_zone(text: &str) -> &str {
    let start = ZONE_START_REGEX.find(text).map_or(0, |m| m.start());
    let end = ZONE_END_REGEX
        .find(&text[start..])
        .map_or(text.len(), |m| start + m.start());
    &text[start..end]
}

/// Extract ordered (equipment code, work item) pairs from document text.
///
/// Within the task zone, every code occurrence owns the chunk of text up
/// to the next code occurrence (or the zone end); the items found in that
/// chunk are deduplicated within the chunk only, preserving first-seen
/// order. The same item under a different code occurrence is kept — dedup
/// across chunks and documents belongs to the ledger merge.
///
/// No code matches anywhere in the zone is a recognized outcome and yields
/// an empty vector, not an error.
#[must_use]
pub fn extract_rows(text: &str) -> Vec<ExtractedRow> {
    let zone = clip_task_zone(text);

    let matches: Vec<CodeMatch> = EQUIPMENT_CODE_REGEX
        .captures_iter(zone)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(CodeMatch {
                code: assemble_code(&caps[1], &caps[2], &caps[3], &caps[4]),
                start: whole.start(),
                end: whole.end(),
            })
        })
        .collect();

    let mut rows = Vec::new();

    for (i, found) in matches.iter().enumerate() {
        let chunk_end = matches.get(i + 1).map_or(zone.len(), |next| next.start);
        let chunk = &zone[found.end..chunk_end];

        let mut seen: HashSet<&str> = HashSet::new();
        for item in WORK_ITEM_REGEX.find_iter(chunk) {
            if seen.insert(item.as_str()) {
                rows.push(ExtractedRow::new(
                    found.code.clone(),
                    WorkItem::new(item.as_str().to_string()),
                ));
            }
        }
    }

    rows
}

/// Normalize one raw code spelling, or `None` if it does not contain a
/// valid code.
///
/// `"1 HNX 10 ST"`, `"1HK-10SE"` and `"1HDD0BST"` normalize to
/// `1HNX10ST`, `1HK10SE` and `1HDD0BST`.
#[must_use]
pub fn normalize_code(raw: &str) -> Option<EquipmentCode> {
    let cleaned = collapse_spaces(raw);
    EQUIPMENT_CODE_REGEX
        .captures(&cleaned)
        .map(|caps| assemble_code(&caps[1], &caps[2], &caps[3], &caps[4]))
}

fn assemble_code(digit: &str, letters: &str, block: &str, suffix: &str) -> EquipmentCode {
    EquipmentCode::new(format!(
        "{digit}{}{}{}",
        letters.to_uppercase(),
        block.to_uppercase(),
        suffix.to_uppercase()
    ))
}

//! Extraction output types: codes, items, rows, metadata, ledger records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized equipment code: one digit, 2-3 letters, a 2-character
/// alphanumeric block, and 2 letters, concatenated uppercase with no
/// separators (e.g. `1HNX10ST`).
///
/// Raw spellings differ in optional spaces and an optional hyphen before
/// the 2-character block; two spellings that normalize to the same
/// segments are the same code. Construction happens in the extraction
/// engine (`shiftlog-extract`), which owns the pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EquipmentCode(String);

impl EquipmentCode {
    /// Wrap an already-normalized code string.
    #[must_use]
    pub fn new(normalized: String) -> Self {
        Self(normalized)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EquipmentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A work-item token: exactly 4 digits, optionally suffixed with `.` and
/// one digit (`2292`, `0031.1`).
///
/// Opaque identifier, not a number — leading zeros are significant, so the
/// raw matched text is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkItem(String);

impl WorkItem {
    #[must_use]
    pub fn new(token: String) -> Self {
        Self(token)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One extracted (equipment code, work item) pair — the atomic unit of
/// extractor output.
///
/// Within one document the same pair never appears twice for the same
/// code occurrence's chunk; across chunks and across documents duplicates
/// may occur (dedup there belongs to the merge layer).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtractedRow {
    pub code: EquipmentCode,
    pub item: WorkItem,
}

impl ExtractedRow {
    #[must_use]
    pub fn new(code: EquipmentCode, item: WorkItem) -> Self {
        Self { code, item }
    }

    /// Full code string: base code and item concatenated (`1HNX10ST2292`).
    #[must_use]
    pub fn code_full(&self) -> String {
        format!("{}{}", self.code, self.item)
    }
}

/// Per-document metadata: the work date and the two signatories.
///
/// Derived once per document. Missing signatures are empty strings, not
/// errors; a missing or out-of-range date is handled by the extraction
/// engine's fallback chain before this struct is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub work_date: NaiveDate,
    pub supervisor: String,
    pub superintendent: String,
}

/// The flat record shape the ledger merge layer works with.
///
/// One record per extracted row, annotated with the document's shared
/// metadata. `source_file` and `ingested_at` are joined in by the batch
/// caller; the extraction core never fills them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRecord {
    /// Base code and item concatenated, e.g. `1HNX10ST2292`.
    pub code_full: String,
    /// Normalized base equipment code, e.g. `1HNX10ST`.
    pub code_base: String,
    /// Work-item token, e.g. `2292` or `0031.1`.
    pub item: String,
    pub work_date: NaiveDate,
    pub supervisor: String,
    pub superintendent: String,
    /// Name of the source document, if the caller attached one.
    ///
    /// Always serialized (empty/null when absent) so tabular codecs keep a
    /// fixed column set.
    #[serde(default)]
    pub source_file: Option<String>,
    /// Ingestion timestamp (RFC 3339, UTC), if the caller attached one.
    #[serde(default)]
    pub ingested_at: Option<String>,
}

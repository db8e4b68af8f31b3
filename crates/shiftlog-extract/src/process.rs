//! Per-document processing: the row-wise join of the three pure stages.

use crate::codes::extract_rows;
use crate::metadata::extract_metadata;
use crate::text::flatten_content;
use shiftlog_core::{ExtractedRow, ReportContent, ReportMetadata, Result};

/// The extraction result for one document: shared metadata plus the
/// ordered (code, item) rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftReport {
    pub metadata: ReportMetadata,
    pub rows: Vec<ExtractedRow>,
}

impl ShiftReport {
    /// True if extraction succeeded but found no (code, item) pairs.
    ///
    /// Caller policy is a warning, not a failure.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Process one document's flattened text.
///
/// # Errors
///
/// Only an out-of-range primary work date fails; zero rows is an `Ok`
/// result with an empty row vector.
pub fn process_text(text: &str, assumed_year: i32) -> Result<ShiftReport> {
    let metadata = extract_metadata(text, assumed_year)?;
    let rows = extract_rows(text);

    if rows.is_empty() {
        log::debug!("no equipment-code rows extracted");
    }

    Ok(ShiftReport { metadata, rows })
}

/// Process one document's structural content (normalize, then extract).
///
/// # Errors
///
/// Same failure surface as [`process_text`].
pub fn process_content(content: &ReportContent, assumed_year: i32) -> Result<ShiftReport> {
    let text = flatten_content(content);
    process_text(&text, assumed_year)
}

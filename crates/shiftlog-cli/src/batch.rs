//! Batch processing with per-document failure isolation.
//!
//! Documents are independent (no shared state, no ordering requirement
//! between them), so the batch fans out across a rayon pool. One bad
//! document never aborts the batch: its error is recorded and the rest
//! proceed.

use indicatif::ProgressBar;
use rayon::prelude::*;
use shiftlog_docx::{DocxBackend, ReportBackend};
use shiftlog_extract::{process_content, ShiftReport};
use std::path::{Path, PathBuf};

/// Result of processing one document.
pub struct DocumentOutcome {
    pub path: PathBuf,
    pub result: Result<ShiftReport, String>,
}

impl DocumentOutcome {
    /// File name for user-facing messages.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| self.path.display().to_string(), |n| n.to_string_lossy().to_string())
    }
}

/// Process every document, in input order, isolating failures.
///
/// The returned outcomes are in the same order as `paths` regardless of
/// scheduling; the progress bar ticks once per finished document.
pub fn process_files(paths: &[PathBuf], assumed_year: i32, progress: &ProgressBar) -> Vec<DocumentOutcome> {
    paths
        .par_iter()
        .map(|path| {
            let outcome = DocumentOutcome {
                path: path.clone(),
                result: process_one(path, assumed_year).map_err(|e| e.to_string()),
            };
            progress.inc(1);
            outcome
        })
        .collect()
}

fn process_one(path: &Path, assumed_year: i32) -> shiftlog_core::Result<ShiftReport> {
    let content = DocxBackend.parse_file(path)?;
    process_content(&content, assumed_year)
}

//! # Shiftlog Core - shared types for shift-report extraction
//!
//! Shiftlog turns free-text shift-report documents into structured ledger
//! records: equipment codes, work items, the work date, and the two
//! signatories. This crate holds the types every other shiftlog crate
//! speaks in:
//!
//! - [`ReportContent`]: the decoded structural content of one document
//!   (paragraphs plus tables), produced by a decoding backend such as
//!   `shiftlog-docx`.
//! - [`EquipmentCode`] / [`WorkItem`] / [`ExtractedRow`]: the atomic
//!   extraction output.
//! - [`ReportMetadata`]: per-document work date and signatories.
//! - [`LedgerRecord`]: the flat record shape the merge layer deduplicates
//!   and sorts.
//! - [`ShiftlogError`] / [`Result`]: the error surface shared by the
//!   extraction engine and its collaborators.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shiftlog_docx::{DocxBackend, ReportBackend};
//! use shiftlog_extract::process_content;
//!
//! fn main() -> shiftlog_core::Result<()> {
//!     let content = DocxBackend.parse_file("shift_report.docx")?;
//!     let report = process_content(&content, 2025)?;
//!     for row in &report.rows {
//!         println!("{} {}", row.code, row.item);
//!     }
//!     Ok(())
//! }
//! ```

pub mod content;
pub mod error;
pub mod record;

pub use content::{ReportContent, ReportTable, TableCell, TableRow};
pub use error::{Result, ShiftlogError};
pub use record::{EquipmentCode, ExtractedRow, LedgerRecord, ReportMetadata, WorkItem};

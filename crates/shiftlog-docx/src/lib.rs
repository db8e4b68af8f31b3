//! # Shiftlog DOCX - decoding backend for Word shift reports
//!
//! Shift reports arrive as `.docx` files; the extraction engine wants the
//! decoded [`ReportContent`](shiftlog_core::ReportContent) tree. This
//! crate bridges the two.
//!
//! DOCX files are ZIP archives; the only member this backend reads is
//! `word/document.xml`, walked as a stream of XML events:
//!
//! - `w:p` / `w:t` character runs accumulate into paragraphs
//!   (`w:tab` contributes a tab, `w:br`/`w:cr` a newline),
//! - `w:tbl` / `w:tr` / `w:tc` build the table tree.
//!
//! Styles, numbering, images, and relationships are irrelevant to text
//! extraction and are not read. Anything that cannot be opened as a ZIP
//! with a well-formed `word/document.xml` is a
//! [`ShiftlogError::MalformedDocument`](shiftlog_core::ShiftlogError).

pub mod backend;
pub mod docx;

pub use backend::ReportBackend;
pub use docx::DocxBackend;

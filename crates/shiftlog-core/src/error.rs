//! Error types for shift-report processing.

use thiserror::Error;

/// Error types that can occur while decoding, extracting, or merging
/// shift-report data.
///
/// The extraction engine itself fails only on date construction
/// ([`ShiftlogError::InvalidWorkDate`]); everything else comes from the
/// collaborators around it. Zero extracted rows is deliberately NOT an
/// error — the extractor returns an empty sequence and the caller decides.
///
/// # Examples
///
/// ```rust,ignore
/// use shiftlog_core::ShiftlogError;
///
/// match shiftlog_extract::process_text(text, 2025) {
///     Ok(report) => println!("{} rows", report.rows.len()),
///     Err(ShiftlogError::InvalidWorkDate { year, month, day }) => {
///         eprintln!("report names an impossible date {year}-{month}-{day}");
///     }
///     Err(e) => eprintln!("failed: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum ShiftlogError {
    /// The primary date pattern matched a day/month/year combination that
    /// is not a valid calendar date (e.g. "31st February").
    ///
    /// This is never caught inside the extraction engine; it is a
    /// whole-document failure the batch layer records and skips.
    #[error("invalid work date: {year}-{month:02}-{day:02} is not a calendar date")]
    InvalidWorkDate { year: i32, month: u32, day: u32 },

    /// The input bytes could not be decoded into structural text blocks at
    /// all (not a ZIP, missing `word/document.xml`, broken XML).
    ///
    /// Raised by decoding backends such as `shiftlog-docx`, never by the
    /// extraction engine, which assumes valid decoded text.
    #[error("malformed document container: {0}")]
    MalformedDocument(String),

    /// File I/O error from a backend's `parse_file` or a ledger codec.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error from the ledger codecs.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Ledger codec error (CSV shape problems, unparseable dates in an
    /// existing ledger).
    #[error("ledger error: {0}")]
    LedgerError(String),
}

/// Type alias for [`Result<T, ShiftlogError>`].
pub type Result<T> = std::result::Result<T, ShiftlogError>;

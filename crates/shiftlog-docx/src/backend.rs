//! Backend trait for document decoding collaborators.

use shiftlog_core::{ReportContent, Result, ShiftlogError};
use std::path::Path;

/// A decoding backend turns container bytes into structural text blocks.
///
/// The extraction engine never touches container formats; backends own
/// that boundary, and report undecodable input as
/// [`ShiftlogError::MalformedDocument`].
pub trait ReportBackend: Send + Sync {
    /// Decode a document from bytes.
    ///
    /// # Errors
    /// Returns an error if the bytes are not a well-formed document
    /// container.
    fn parse_bytes(&self, data: &[u8]) -> Result<ReportContent>;

    /// Decode a document from a file path.
    ///
    /// # Errors
    /// Returns an error if file reading or decoding fails.
    fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<ReportContent> {
        let data = std::fs::read(path.as_ref()).map_err(ShiftlogError::IoError)?;
        self.parse_bytes(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedBackend;

    impl ReportBackend for FixedBackend {
        fn parse_bytes(&self, _data: &[u8]) -> Result<ReportContent> {
            Ok(ReportContent::from_paragraphs(["fixed"]))
        }
    }

    #[test]
    fn test_parse_file_default_reads_then_parses() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"anything").unwrap();

        let content = FixedBackend.parse_file(file.path()).unwrap();
        assert_eq!(content.paragraphs, vec!["fixed"]);
    }

    #[test]
    fn test_parse_file_missing_path_is_io_error() {
        let result = FixedBackend.parse_file("/nonexistent/report.docx");
        assert!(matches!(result, Err(ShiftlogError::IoError(_))));
    }
}

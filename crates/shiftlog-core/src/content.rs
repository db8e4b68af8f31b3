//! Structural document content as handed to the extraction engine.
//!
//! A decoding backend (e.g. the DOCX walker in `shiftlog-docx`) produces a
//! [`ReportContent`]: the ordered plain-text paragraphs of the document body
//! plus its tables as a row-major grid of cells, each cell again a sequence
//! of paragraphs. The extraction engine never sees the container format —
//! only this tree.

use serde::{Deserialize, Serialize};

/// Decoded structural content of one shift-report document.
///
/// Reading order is paragraphs first, then tables in document order, each
/// table row-major, each cell's paragraphs in order. Immutable once
/// produced by a backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportContent {
    /// Plain-text body paragraphs, in document order.
    pub paragraphs: Vec<String>,
    /// Tables, in document order.
    pub tables: Vec<ReportTable>,
}

/// One table: an ordered sequence of rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTable {
    pub rows: Vec<TableRow>,
}

/// One table row: an ordered sequence of cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

/// One table cell: an ordered sequence of plain-text paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    pub paragraphs: Vec<String>,
}

impl ReportContent {
    /// True if the document decoded to no text blocks at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty() && self.tables.is_empty()
    }

    /// Build content from bare paragraph strings (no tables).
    ///
    /// Convenience for tests and for plain-text ingestion paths.
    #[must_use]
    pub fn from_paragraphs<I, S>(paragraphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paragraphs: paragraphs.into_iter().map(Into::into).collect(),
            tables: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content() {
        let content = ReportContent::default();
        assert!(content.is_empty());
    }

    #[test]
    fn test_from_paragraphs() {
        let content = ReportContent::from_paragraphs(["a", "b"]);
        assert_eq!(content.paragraphs, vec!["a", "b"]);
        assert!(content.tables.is_empty());
        assert!(!content.is_empty());
    }

    #[test]
    fn test_content_with_only_tables_not_empty() {
        let content = ReportContent {
            paragraphs: Vec::new(),
            tables: vec![ReportTable {
                rows: vec![TableRow {
                    cells: vec![TableCell {
                        paragraphs: vec!["cell".to_string()],
                    }],
                }],
            }],
        };
        assert!(!content.is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let content = ReportContent {
            paragraphs: vec!["Shift Report".to_string()],
            tables: vec![ReportTable {
                rows: vec![TableRow {
                    cells: vec![
                        TableCell {
                            paragraphs: vec!["Date".to_string()],
                        },
                        TableCell {
                            paragraphs: vec!["7th January".to_string()],
                        },
                    ],
                }],
            }],
        };

        let json = serde_json::to_string(&content).unwrap();
        let back: ReportContent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, content);
    }
}

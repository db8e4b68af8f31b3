//! Text normalizer: structural content → one line-delimited string.

use regex::Regex;
use shiftlog_core::ReportContent;
use std::sync::LazyLock;

/// Runs of spaces/tabs, for collapsing inside captured names.
static SPACE_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("valid space run regex"));

/// Collapse a document's structural content into one string.
///
/// Every non-blank, whitespace-trimmed text block contributes one line, in
/// reading order: body paragraphs first, then each table row-major, then
/// each cell's paragraphs in order. Blank blocks are dropped entirely, not
/// replaced with empty lines. An empty document yields an empty string.
#[must_use]
pub fn flatten_content(content: &ReportContent) -> String {
    let mut lines: Vec<&str> = Vec::new();

    for paragraph in &content.paragraphs {
        let trimmed = paragraph.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed);
        }
    }

    for table in &content.tables {
        for row in &table.rows {
            for cell in &row.cells {
                for paragraph in &cell.paragraphs {
                    let trimmed = paragraph.trim();
                    if !trimmed.is_empty() {
                        lines.push(trimmed);
                    }
                }
            }
        }
    }

    lines.join("\n")
}

/// Collapse internal runs of spaces/tabs to a single space and trim.
#[must_use]
pub fn collapse_spaces(s: &str) -> String {
    SPACE_RUN_REGEX.replace_all(s, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiftlog_core::{ReportTable, TableCell, TableRow};

    fn cell(paragraphs: &[&str]) -> TableCell {
        TableCell {
            paragraphs: paragraphs.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_document_yields_empty_string() {
        assert_eq!(flatten_content(&ReportContent::default()), "");
    }

    #[test]
    fn test_paragraphs_only() {
        let content = ReportContent::from_paragraphs(["  Shift Report ", "", "   ", "7th January"]);
        assert_eq!(flatten_content(&content), "Shift Report\n7th January");
    }

    #[test]
    fn test_paragraphs_before_tables_row_major() {
        let content = ReportContent {
            paragraphs: vec!["body".to_string()],
            tables: vec![ReportTable {
                rows: vec![
                    TableRow {
                        cells: vec![cell(&["r1c1"]), cell(&["r1c2a", "r1c2b"])],
                    },
                    TableRow {
                        cells: vec![cell(&["r2c1"])],
                    },
                ],
            }],
        };
        assert_eq!(
            flatten_content(&content),
            "body\nr1c1\nr1c2a\nr1c2b\nr2c1"
        );
    }

    #[test]
    fn test_blank_cells_dropped_not_blank_lines() {
        let content = ReportContent {
            paragraphs: vec![],
            tables: vec![ReportTable {
                rows: vec![TableRow {
                    cells: vec![cell(&["", "  ", "kept"])],
                }],
            }],
        };
        assert_eq!(flatten_content(&content), "kept");
    }

    #[test]
    fn test_deterministic() {
        let content = ReportContent::from_paragraphs(["a", "b"]);
        assert_eq!(flatten_content(&content), flatten_content(&content));
    }

    #[test]
    fn test_collapse_spaces() {
        assert_eq!(collapse_spaces("  John   \t O'Brien  "), "John O'Brien");
        assert_eq!(collapse_spaces(""), "");
    }
}

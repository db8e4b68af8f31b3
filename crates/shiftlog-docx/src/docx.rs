//! DOCX (Microsoft Word) shift-report decoder.
//!
//! Manual ZIP + XML parsing: open the archive, read
//! `word/document.xml`, and walk its events with a small state machine.
//! Body-level paragraphs and table-cell paragraphs are collected into
//! separate ordered sequences, preserving the paragraphs-then-tables
//! reading order the normalizer expects.

use crate::backend::ReportBackend;
use quick_xml::events::Event;
use quick_xml::Reader;
use shiftlog_core::{ReportContent, ReportTable, Result, ShiftlogError, TableCell, TableRow};
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// DOCX decoding backend.
///
/// ```rust,ignore
/// use shiftlog_docx::{DocxBackend, ReportBackend};
///
/// let content = DocxBackend.parse_file("shift_report.docx")?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxBackend;

impl ReportBackend for DocxBackend {
    fn parse_bytes(&self, data: &[u8]) -> Result<ReportContent> {
        let mut archive = ZipArchive::new(Cursor::new(data)).map_err(|e| {
            ShiftlogError::MalformedDocument(format!("failed to open DOCX as ZIP: {e}"))
        })?;

        let xml_content = {
            let mut document_xml = archive.by_name("word/document.xml").map_err(|e| {
                ShiftlogError::MalformedDocument(format!("missing word/document.xml: {e}"))
            })?;

            let mut content = String::new();
            document_xml
                .read_to_string(&mut content)
                .map_err(|e| ShiftlogError::MalformedDocument(format!("unreadable document.xml: {e}")))?;
            content
        };

        walk_body(&xml_content)
    }
}

/// State for the document.xml walk.
///
/// `table_depth` tracks nesting: structure is built for depth 1 only;
/// paragraphs inside nested tables flatten into the enclosing cell.
#[derive(Default)]
struct BodyWalker {
    content: ReportContent,
    paragraph: String,
    in_run: bool,
    in_text: bool,
    table_depth: usize,
}

impl BodyWalker {
    /// Close the current paragraph and attach it to the open cell, or to
    /// the document body when no table is open.
    fn push_paragraph(&mut self) {
        let text = std::mem::take(&mut self.paragraph);

        if self.table_depth > 0 {
            if let Some(cell) = self
                .content
                .tables
                .last_mut()
                .and_then(|table| table.rows.last_mut())
                .and_then(|row| row.cells.last_mut())
            {
                cell.paragraphs.push(text);
                return;
            }
            log::warn!("paragraph inside a table but outside any cell, keeping as body text");
        }

        self.content.paragraphs.push(text);
    }

    fn open_table(&mut self) {
        if self.table_depth == 0 {
            self.content.tables.push(ReportTable::default());
        }
        self.table_depth += 1;
    }

    fn open_row(&mut self) {
        if self.table_depth == 1 {
            if let Some(table) = self.content.tables.last_mut() {
                table.rows.push(TableRow::default());
            }
        }
    }

    fn open_cell(&mut self) {
        if self.table_depth == 1 {
            if let Some(row) = self.content.tables.last_mut().and_then(|t| t.rows.last_mut()) {
                row.cells.push(TableCell::default());
            }
        }
    }
}

/// Walk `word/document.xml` and collect paragraphs and tables.
fn walk_body(xml_content: &str) -> Result<ReportContent> {
    // No trim_text: character runs carry significant spaces
    // (xml:space="preserve").
    let mut reader = Reader::from_str(xml_content);
    let mut state = BodyWalker::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => state.paragraph.clear(),
                b"w:r" => state.in_run = true,
                b"w:t" => state.in_text = true,
                b"w:tbl" => state.open_table(),
                b"w:tr" => state.open_row(),
                b"w:tc" => state.open_cell(),
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:p" => state.push_paragraph(),
                b"w:r" => state.in_run = false,
                b"w:t" => state.in_text = false,
                b"w:tbl" => state.table_depth = state.table_depth.saturating_sub(1),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                // Self-closing paragraph: an intentionally blank block.
                b"w:p" => {
                    state.paragraph.clear();
                    state.push_paragraph();
                }
                b"w:tab" if state.in_run => state.paragraph.push('\t'),
                b"w:br" | b"w:cr" if state.in_run => state.paragraph.push('\n'),
                _ => {}
            },
            Ok(Event::Text(t)) if state.in_text => {
                let text = t.unescape().map_err(|e| {
                    ShiftlogError::MalformedDocument(format!("bad character data: {e}"))
                })?;
                state.paragraph.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ShiftlogError::MalformedDocument(format!(
                    "error parsing document.xml: {e}"
                )))
            }
            _ => {}
        }
    }

    Ok(state.content)
}

//! Ledger codecs over generic readers and writers.
//!
//! Two formats: CSV (a fixed eight-column table, empty cells for absent
//! provenance) and JSON (an array of record objects). Both operate on
//! `io::Read`/`io::Write` only; what those wrap is the caller's business.

use shiftlog_core::{LedgerRecord, Result, ShiftlogError};
use std::io;

/// Read a CSV ledger.
///
/// # Errors
/// Returns [`ShiftlogError::LedgerError`] for rows that do not fit the
/// record shape (missing columns, unparseable dates).
pub fn read_csv<R: io::Read>(reader: R) -> Result<Vec<LedgerRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize() {
        let record: LedgerRecord =
            row.map_err(|e| ShiftlogError::LedgerError(format!("bad ledger row: {e}")))?;
        records.push(record);
    }

    Ok(records)
}

/// Write a CSV ledger.
///
/// # Errors
/// Returns an error when serialization or the underlying writer fails.
pub fn write_csv<W: io::Write>(writer: W, records: &[LedgerRecord]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for record in records {
        csv_writer
            .serialize(record)
            .map_err(|e| ShiftlogError::LedgerError(format!("cannot write ledger row: {e}")))?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Read a JSON ledger (an array of records).
///
/// # Errors
/// Returns [`ShiftlogError::JsonError`] on malformed JSON.
pub fn read_json<R: io::Read>(reader: R) -> Result<Vec<LedgerRecord>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Write a JSON ledger.
///
/// # Errors
/// Returns an error when serialization or the underlying writer fails.
pub fn write_json<W: io::Write>(writer: W, records: &[LedgerRecord]) -> Result<()> {
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}

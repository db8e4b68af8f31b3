//! Record construction and the append + dedup + sort merge.

use chrono::NaiveDate;
use shiftlog_core::{ExtractedRow, LedgerRecord, ReportMetadata};
use std::collections::HashSet;

/// Join one document's extracted rows with its shared metadata.
///
/// `source_file` and `ingested_at` are caller-owned provenance; the
/// extraction core never fills them, the batch layer does.
#[must_use]
pub fn build_records(
    rows: &[ExtractedRow],
    metadata: &ReportMetadata,
    source_file: Option<&str>,
    ingested_at: Option<&str>,
) -> Vec<LedgerRecord> {
    rows.iter()
        .map(|row| LedgerRecord {
            code_full: row.code_full(),
            code_base: row.code.to_string(),
            item: row.item.to_string(),
            work_date: metadata.work_date,
            supervisor: metadata.supervisor.clone(),
            superintendent: metadata.superintendent.clone(),
            source_file: source_file.map(str::to_string),
            ingested_at: ingested_at.map(str::to_string),
        })
        .collect()
}

/// Merge new records into an existing ledger.
///
/// The existing ledger comes first, so on a key collision the already-
/// ledgered record wins and the incoming duplicate is dropped. The dedup
/// key is (full code, work date); the result is stably sorted ascending by
/// (work date, full code).
#[must_use]
pub fn merge(existing: Vec<LedgerRecord>, new: Vec<LedgerRecord>) -> Vec<LedgerRecord> {
    let incoming = existing.len() + new.len();

    let mut seen: HashSet<(String, NaiveDate)> = HashSet::new();
    let mut combined: Vec<LedgerRecord> = Vec::with_capacity(incoming);

    for record in existing.into_iter().chain(new) {
        if seen.insert((record.code_full.clone(), record.work_date)) {
            combined.push(record);
        }
    }

    let dropped = incoming - combined.len();
    if dropped > 0 {
        log::debug!("merge dropped {dropped} duplicate record(s)");
    }

    combined.sort_by(|a, b| {
        (a.work_date, a.code_full.as_str()).cmp(&(b.work_date, b.code_full.as_str()))
    });
    combined
}

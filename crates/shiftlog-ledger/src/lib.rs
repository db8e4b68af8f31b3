//! # Shiftlog Ledger - the running master ledger of extracted rows
//!
//! The extraction engine produces per-document rows; this crate maintains
//! the cumulative ledger across runs:
//!
//! - [`build_records`]: join one document's rows with its shared metadata
//!   (and the caller's provenance) into flat [`LedgerRecord`]s.
//! - [`merge`]: append new records to an existing ledger, deduplicate by
//!   (full code, work date) keeping the first occurrence, and stable-sort
//!   ascending by (work date, full code).
//! - [`codec`]: CSV and JSON codecs over generic readers/writers. The
//!   crate never opens files itself; callers own storage.

pub mod codec;
pub mod merge;

pub use codec::{read_csv, read_json, write_csv, write_json};
pub use merge::{build_records, merge};

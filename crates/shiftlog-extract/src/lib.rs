//! # Shiftlog Extract - the shift-report extraction engine
//!
//! Three cooperating stages, each pure (no I/O, deterministic given its
//! inputs):
//!
//! 1. **Text normalizer** ([`text::flatten_content`]) — collapses a
//!    document's structural blocks into one ordered, newline-joined string.
//! 2. **Metadata extractor** ([`metadata::extract_metadata`]) — work date
//!    (with a three-step fallback chain) plus the two signatories.
//! 3. **Code/item extractor** ([`codes::extract_rows`]) — repeating
//!    "equipment-code, item-list" groups inside the task zone, flattened to
//!    (code, item) pairs with chunk-scoped dedup.
//!
//! [`process_content`] wires the stages together for one document. All
//! compiled patterns are module-scope immutable statics, initialized once.
//!
//! Zero extracted rows is a legitimate result, not an error. The only
//! internal failure is an out-of-range calendar date in the primary date
//! pattern, which propagates as
//! [`ShiftlogError::InvalidWorkDate`](shiftlog_core::ShiftlogError).

pub mod codes;
pub mod dates;
pub mod metadata;
pub mod process;
pub mod text;

pub use codes::{extract_rows, normalize_code};
pub use metadata::extract_metadata;
pub use process::{process_content, process_text, ShiftReport};
pub use text::flatten_content;

//! Record Module
//!
//! The on-media log: record layout, the shared scanner, and the commit
//! protocol that appends and tombstones records.
//!
//! ## Medium Layout
//! ```text
//! addr 0                                                    high-water mark
//! ┌────────────────┬────────────────┬─────┬────────────────┬──────────────┐
//! │   Record 1     │   Record 2     │ ... │   Record N     │ 0xFF 0xFF .. │
//! └────────────────┴────────────────┴─────┴────────────────┴──────────────┘
//!
//! Record:
//! ┌─────────┬────────────┬───────────┬──────────────┬─────────────┐
//! │ Tag (1) │ KeyLen (1) │ Key (var) │ ValueLen (1) │ Value (var) │
//! └─────────┴────────────┴───────────┴──────────────┴─────────────┘
//! ```
//!
//! ### Tags
//! - 0x7F: ACTIVE    - live key/value pair
//! - 0x00: TOMBSTONE - deleted, space not reclaimed
//! - 0xFF: BLANK     - erased medium, end of log
//! - anything else: corrupted, scanning stops

mod codec;
mod scanner;
mod tag;
mod verify;
mod writer;

pub use codec::{record_span, Record, RecordHeader, HEADER_LEN};
pub use scanner::{Corruption, LogEnd, Scan, Scanner, Visit};
pub use tag::RecordTag;
pub use verify::{verify_log, LogReport};
pub use writer::RecordWriter;

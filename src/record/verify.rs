//! Log verification
//!
//! Walks the whole log and summarises what it holds.

use std::convert::Infallible;

use super::codec::RecordHeader;
use super::scanner::{Corruption, Scan, Scanner, Visit};
use crate::error::Result;
use crate::medium::Medium;

/// Summary of a full log walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogReport {
    /// Number of live records
    pub active_records: usize,

    /// Number of tombstoned records
    pub tombstoned_records: usize,

    /// Bytes held by live records (headers included)
    pub active_bytes: usize,

    /// Bytes held by tombstones, never reclaimed before an erase
    pub tombstoned_bytes: usize,

    /// First free address
    pub high_water: usize,

    /// Bytes between the high-water mark and the end of the medium
    pub free_bytes: usize,

    /// Where the walk stopped on damaged data, if it did
    pub corruption: Option<(usize, Corruption)>,
}

impl LogReport {
    pub fn is_clean(&self) -> bool {
        self.corruption.is_none()
    }

    pub fn record_count(&self) -> usize {
        self.active_records + self.tombstoned_records
    }

    fn count(&mut self, header: &RecordHeader) {
        if header.is_active() {
            self.active_records += 1;
            self.active_bytes += header.span();
        } else {
            self.tombstoned_records += 1;
            self.tombstoned_bytes += header.span();
        }
    }
}

/// Walk the log of `medium` without modifying it
pub fn verify_log<M: Medium + ?Sized>(medium: &M) -> Result<LogReport> {
    let mut report = LogReport::default();

    let end = match Scanner::new(medium).run(|header| {
        report.count(header);
        Ok(Visit::<Infallible>::Continue)
    })? {
        Scan::Ended(end) => end,
        Scan::Stopped(never) => match never {},
    };

    report.high_water = end.high_water();
    report.free_bytes = medium.capacity() - report.high_water;
    report.corruption = end.corruption();
    Ok(report)
}

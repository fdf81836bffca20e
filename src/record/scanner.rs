//! Log scanner
//!
//! The single traversal shared by lookup, free-space location, dump and
//! verification. It walks records from address 0 and hands each header to
//! a caller-supplied visitor.
//!
//! ## Stop Conditions
//! - BLANK tag (or the end of the medium): clean end of log
//! - unknown tag byte: corrupted, nothing past it is trusted
//! - a header or record running past the medium: corrupted
//!
//! Only header bytes are read; payloads are skipped with `record_span`.

use std::convert::Infallible;

use thiserror::Error;

use super::codec::{record_span, RecordHeader};
use super::tag::RecordTag;
use crate::error::Result;
use crate::medium::Medium;

/// Visitor decision for one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visit<T> {
    /// Advance to the next record
    Continue,

    /// Terminate the scan with a result
    Stop(T),
}

/// Why a scan refused to go further
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Corruption {
    #[error("unknown tag byte 0x{0:02x}")]
    UnknownTag(u8),

    #[error("record of {span} bytes runs past the end of the medium")]
    Overrun { span: usize },
}

/// Where and how the log ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogEnd {
    /// Blank tag, or the last record ends exactly at capacity
    Clean { high_water: usize },

    /// Malformed record at `addr`
    Corrupted { addr: usize, cause: Corruption },
}

impl LogEnd {
    /// First address not claimed by a trusted record
    pub fn high_water(&self) -> usize {
        match *self {
            LogEnd::Clean { high_water } => high_water,
            LogEnd::Corrupted { addr, .. } => addr,
        }
    }

    pub fn corruption(&self) -> Option<(usize, Corruption)> {
        match *self {
            LogEnd::Clean { .. } => None,
            LogEnd::Corrupted { addr, cause } => Some((addr, cause)),
        }
    }
}

/// Outcome of a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scan<T> {
    /// A visitor returned `Visit::Stop`
    Stopped(T),

    /// Every record was visited
    Ended(LogEnd),
}

/// Walks the record log of a medium
pub struct Scanner<'a, M: Medium + ?Sized> {
    medium: &'a M,
}

impl<'a, M: Medium + ?Sized> Scanner<'a, M> {
    pub fn new(medium: &'a M) -> Self {
        Self { medium }
    }

    /// Visit records in address order until the visitor stops or the log ends.
    ///
    /// Runs in O(records) medium reads and O(1) memory.
    pub fn run<T, F>(&self, mut visit: F) -> Result<Scan<T>>
    where
        F: FnMut(&RecordHeader) -> Result<Visit<T>>,
    {
        let mut addr = 0;
        loop {
            let header = match self.header_at(addr)? {
                Ok(header) => header,
                Err(end) => {
                    if let Some((at, cause)) = end.corruption() {
                        tracing::warn!("Log scan stopped at 0x{:04x}: {}", at, cause);
                    }
                    return Ok(Scan::Ended(end));
                }
            };

            match visit(&header)? {
                Visit::Continue => addr = header.end(),
                Visit::Stop(result) => return Ok(Scan::Stopped(result)),
            }
        }
    }

    /// Walk the whole log and report where it ends
    pub fn log_end(&self) -> Result<LogEnd> {
        match self.run(|_| Ok(Visit::<Infallible>::Continue))? {
            Scan::Ended(end) => Ok(end),
            Scan::Stopped(never) => match never {},
        }
    }

    /// Read the header of the record starting at `addr`, or where the log ends
    fn header_at(&self, addr: usize) -> Result<std::result::Result<RecordHeader, LogEnd>> {
        let capacity = self.medium.capacity();
        if addr >= capacity {
            return Ok(Err(LogEnd::Clean { high_water: capacity }));
        }

        let tag = match RecordTag::try_from(self.medium.read_byte(addr)?) {
            Ok(RecordTag::Blank) => return Ok(Err(LogEnd::Clean { high_water: addr })),
            Ok(tag @ (RecordTag::Active | RecordTag::Tombstone)) => tag,
            Err(byte) => {
                return Ok(Err(LogEnd::Corrupted {
                    addr,
                    cause: Corruption::UnknownTag(byte),
                }))
            }
        };

        let overrun = |span| LogEnd::Corrupted {
            addr,
            cause: Corruption::Overrun { span },
        };

        if addr + 1 >= capacity {
            return Ok(Err(overrun(record_span(0, 0))));
        }
        let key_len = self.medium.read_byte(addr + 1)?;

        let value_len_addr = addr + 2 + key_len as usize;
        if value_len_addr >= capacity {
            return Ok(Err(overrun(record_span(key_len as usize, 0))));
        }
        let value_len = self.medium.read_byte(value_len_addr)?;

        let header = RecordHeader {
            addr,
            tag,
            key_len,
            value_len,
        };
        if header.end() > capacity {
            return Ok(Err(overrun(header.span())));
        }
        Ok(Ok(header))
    }
}

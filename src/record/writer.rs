//! Record writer
//!
//! The only code that mutates the medium.
//!
//! ## Commit Order
//! A record is written payload first and tag last:
//!
//! ```text
//! addr:   F      F+1      F+2 ..      ..        .. F+span-1
//!         ┌──────┬────────┬─────────┬──────────┬───────────┐
//! step:   │ last │   1    │   2..   │   ..     │    ..     │
//!         └──────┴────────┴─────────┴──────────┴───────────┘
//! ```
//!
//! Until the tag lands, `F` still reads BLANK, so an interrupted append
//! leaves the log ending at `F` and the next append reuses the slot.

use super::codec::Record;
use super::tag::RecordTag;
use crate::error::{Result, StoreError};
use crate::medium::{Medium, ERASED};

/// Writes records onto a medium
pub struct RecordWriter<'a, M: Medium + ?Sized> {
    medium: &'a mut M,
}

impl<'a, M: Medium + ?Sized> RecordWriter<'a, M> {
    pub fn new(medium: &'a mut M) -> Self {
        Self { medium }
    }

    /// Append `record` at `addr`, returning its span.
    ///
    /// `addr` must be the high-water mark.
    pub fn append(&mut self, addr: usize, record: &Record) -> Result<usize> {
        let bytes = record.encode()?;
        let capacity = self.medium.capacity();
        if addr + bytes.len() > capacity {
            return Err(StoreError::NoSpaceLeft {
                needed: bytes.len(),
                available: capacity.saturating_sub(addr),
            });
        }

        for (offset, byte) in bytes.iter().enumerate().skip(1) {
            self.medium.update_byte(addr + offset, *byte)?;
        }
        self.medium.write_byte(addr, bytes[0])?;
        self.medium.flush()?;

        tracing::debug!("Appended {}-byte record at 0x{:04x}", bytes.len(), addr);
        Ok(bytes.len())
    }

    /// Flip the tag at `addr` to TOMBSTONE, leaving the payload in place
    pub fn tombstone(&mut self, addr: usize) -> Result<()> {
        self.medium.update_byte(addr, RecordTag::Tombstone.as_byte())?;
        self.medium.flush()?;
        tracing::debug!("Tombstoned record at 0x{:04x}", addr);
        Ok(())
    }

    /// Erase every byte from `addr` to the end of the medium.
    ///
    /// Runs from the last byte down so `addr` is blanked last; an
    /// interrupted pass still leaves whatever stood at `addr` in place.
    /// Returns the number of bytes that needed a write cycle.
    pub fn erase_from(&mut self, addr: usize) -> Result<usize> {
        let mut rewritten = 0;
        for at in (addr..self.medium.capacity()).rev() {
            if self.medium.update_byte(at, ERASED)? {
                rewritten += 1;
            }
        }
        self.medium.flush()?;
        Ok(rewritten)
    }

    /// Reset every byte to the erased state.
    ///
    /// Returns the number of bytes that needed a write cycle.
    pub fn erase(&mut self) -> Result<usize> {
        self.erase_from(0)
    }
}

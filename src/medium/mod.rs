//! Medium Module
//!
//! Byte-addressable, write-endurance-limited non-volatile storage.
//!
//! ## Responsibilities
//! - Single-byte reads and writes over `[0, capacity)`
//! - Erased state is 0xFF everywhere
//! - No interpretation of the bytes (the record layer owns the format)
//!
//! ## Implementations
//! - [`MemoryMedium`]: RAM-backed, for tests and benchmarks
//! - [`FileMedium`]: fixed-size image file that survives restarts

mod file;
mod memory;

pub use file::FileMedium;
pub use memory::MemoryMedium;

use crate::error::{Result, StoreError};

/// Value of every byte of an erased medium
pub const ERASED: u8 = 0xFF;

/// A byte-addressable non-volatile medium.
///
/// Every access is synchronous and addresses a single byte. Addresses at or
/// beyond [`Medium::capacity`] fail with `StoreError::AddressOutOfRange`.
pub trait Medium {
    /// Number of addressable bytes
    fn capacity(&self) -> usize;

    /// Read the byte stored at `addr`
    fn read_byte(&self, addr: usize) -> Result<u8>;

    /// Write `byte` at `addr`, costing one write cycle
    fn write_byte(&mut self, addr: usize, byte: u8) -> Result<()>;

    /// Write `byte` at `addr` only if it differs from the stored byte.
    ///
    /// Returns whether a write cycle was spent.
    fn update_byte(&mut self, addr: usize, byte: u8) -> Result<bool> {
        if self.read_byte(addr)? == byte {
            return Ok(false);
        }
        self.write_byte(addr, byte)?;
        Ok(true)
    }

    /// Make previous writes durable
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    /// Read `len` consecutive bytes starting at `addr`
    fn read_range(&self, addr: usize, len: usize) -> Result<Vec<u8>> {
        (addr..addr + len).map(|a| self.read_byte(a)).collect()
    }
}

/// Fail unless `addr` lies inside a medium of `capacity` bytes
pub(crate) fn check_addr(addr: usize, capacity: usize) -> Result<()> {
    if addr >= capacity {
        return Err(StoreError::AddressOutOfRange { addr, capacity });
    }
    Ok(())
}

//! In-memory medium for tests and benchmarks.

use super::{check_addr, Medium, ERASED};
use crate::error::Result;

/// A RAM-backed medium.
///
/// Starts fully erased and counts every physical write so tests can check
/// how many write cycles an operation spent.
#[derive(Debug, Clone)]
pub struct MemoryMedium {
    bytes: Vec<u8>,
    writes: u64,
}

impl MemoryMedium {
    /// Create an erased medium of `capacity` bytes
    pub fn new(capacity: usize) -> Self {
        Self {
            bytes: vec![ERASED; capacity],
            writes: 0,
        }
    }

    /// Create a medium holding an existing image.
    ///
    /// Useful for loading media written elsewhere or hand-built corruption.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes, writes: 0 }
    }

    /// Raw contents of the medium
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the medium and return its image
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Number of write cycles spent since creation
    pub fn write_count(&self) -> u64 {
        self.writes
    }
}

impl Medium for MemoryMedium {
    fn capacity(&self) -> usize {
        self.bytes.len()
    }

    fn read_byte(&self, addr: usize) -> Result<u8> {
        check_addr(addr, self.bytes.len())?;
        Ok(self.bytes[addr])
    }

    fn write_byte(&mut self, addr: usize, byte: u8) -> Result<()> {
        check_addr(addr, self.bytes.len())?;
        self.bytes[addr] = byte;
        self.writes += 1;
        Ok(())
    }

    fn read_range(&self, addr: usize, len: usize) -> Result<Vec<u8>> {
        if len == 0 {
            return Ok(Vec::new());
        }
        check_addr(addr + len - 1, self.bytes.len())?;
        Ok(self.bytes[addr..addr + len].to_vec())
    }
}

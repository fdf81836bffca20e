//! Record Tests
//!
//! Tests for the record codec, scanner, writer and log verification.

mod scanner_tests;

use eepromkv::medium::{MemoryMedium, ERASED};

/// Build an image of `capacity` bytes starting with `records` back to back
pub fn image(records: &[&[u8]], capacity: usize) -> MemoryMedium {
    let mut bytes: Vec<u8> = records.concat();
    assert!(bytes.len() <= capacity);
    bytes.resize(capacity, ERASED);
    MemoryMedium::from_bytes(bytes)
}

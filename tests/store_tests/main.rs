//! Key Store Tests
//!
//! These tests verify:
//! - READ/WRITE/FORGET/CLEAR semantics
//! - Validation order and boundary lengths
//! - Space accounting (no reclamation of tombstones)
//! - Behaviour on corrupted media under both policies
//! - Persistence through a file-backed medium

mod file_store_tests;

use eepromkv::{Config, KeyStore, MemoryMedium};

/// Store over a fresh 1 KiB medium with 32-byte limits
pub fn setup_store() -> KeyStore<MemoryMedium> {
    KeyStore::open(MemoryMedium::new(1024), Config::default()).unwrap()
}

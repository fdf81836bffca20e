//! Error types for eepromkv
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

use crate::record::Corruption;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Unified error type for eepromkv operations
#[derive(Debug, Error)]
pub enum StoreError {
    // -------------------------------------------------------------------------
    // Validation Errors (checked before the medium is touched)
    // -------------------------------------------------------------------------
    #[error("invalid key: length {len}")]
    InvalidKey { len: usize },

    #[error("invalid value: length {len}")]
    InvalidValue { len: usize },

    // -------------------------------------------------------------------------
    // Key Store Errors
    // -------------------------------------------------------------------------
    #[error("key already exists")]
    AlreadyExists,

    #[error("key not found")]
    NotFound,

    #[error("no space left: record needs {needed} bytes, {available} available")]
    NoSpaceLeft { needed: usize, available: usize },

    #[error("log corrupted at 0x{addr:04x}: {cause}")]
    Corrupted { addr: usize, cause: Corruption },

    // -------------------------------------------------------------------------
    // Medium Errors
    // -------------------------------------------------------------------------
    #[error("address 0x{addr:04x} outside medium of {capacity} bytes")]
    AddressOutOfRange { addr: usize, capacity: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Console Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

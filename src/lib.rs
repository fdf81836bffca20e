//! # eepromkv
//!
//! A persistent key-value store for a small byte-addressable
//! non-volatile medium (a 1 KiB EEPROM by default):
//! - Self-describing append-only record log, parsed by linear scan
//! - Key uniqueness without an index
//! - Tombstone deletes that flip a single byte
//! - Fail-stop scanning on corrupted media
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Console (READ/WRITE/FORGET/...)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Key Store                              │
//! │         (validation, uniqueness, free-space locator)         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Scanner   │          │   Writer    │
//!   │   (read)    │          │  (append)   │
//!   └──────┬──────┘          └──────┬──────┘
//!          └────────────┬────────────┘
//!                       ▼
//!               ┌─────────────┐
//!               │   Medium    │
//!               │ (byte r/w)  │
//!               └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod console;
pub mod dump;
pub mod medium;
pub mod protocol;
pub mod record;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::Config;
pub use error::{Result, StoreError};
pub use medium::{FileMedium, Medium, MemoryMedium};
pub use store::KeyStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of eepromkv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

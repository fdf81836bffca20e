//! Configuration for eepromkv
//!
//! Centralized configuration with defaults matching a 1 KiB EEPROM.

use std::path::PathBuf;

use crate::error::{Result, StoreError};

/// Largest length a single header byte can describe
pub const MAX_FIELD_LEN: usize = u8::MAX as usize;

/// Main configuration for an eepromkv instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Medium Configuration
    // -------------------------------------------------------------------------
    /// Image file backing the medium (used by the binaries)
    pub image_path: PathBuf,

    /// Size of the medium in bytes
    pub capacity: usize,

    /// When a file-backed medium pushes writes to disk
    pub sync_strategy: SyncStrategy,

    // -------------------------------------------------------------------------
    // Record Configuration
    // -------------------------------------------------------------------------
    /// Longest accepted key (1..=255)
    pub max_key_len: usize,

    /// Longest accepted value (1..=255)
    pub max_value_len: usize,

    /// What scanning operations do when they meet a malformed tag
    pub corruption_policy: CorruptionPolicy,

    // -------------------------------------------------------------------------
    // Console Configuration
    // -------------------------------------------------------------------------
    /// Longest console line kept; extra input is dropped
    pub max_line_len: usize,

    /// Prompt printed before each command
    pub prompt: String,
}

/// Sync strategy for file-backed media
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// fsync after every byte written (closest to the real medium)
    EveryWrite,

    /// fsync once at the end of each mutating operation
    EveryOperation,
}

/// Behaviour when a scan stops on a corrupted record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorruptionPolicy {
    /// Behave as if the log ended at the corruption point
    TreatAsEnd,

    /// Fail every scanning operation with `StoreError::Corrupted`
    Reject,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_path: PathBuf::from("./eeprom.bin"),
            capacity: 1024,
            sync_strategy: SyncStrategy::EveryOperation,
            max_key_len: 32,
            max_value_len: 32,
            corruption_policy: CorruptionPolicy::TreatAsEnd,
            max_line_len: 127,
            prompt: "> ".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that every field is usable
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_FIELD_LEN).contains(&self.max_key_len) {
            return Err(StoreError::Config(format!(
                "max_key_len must be in 1..={}, got {}",
                MAX_FIELD_LEN, self.max_key_len
            )));
        }
        if !(1..=MAX_FIELD_LEN).contains(&self.max_value_len) {
            return Err(StoreError::Config(format!(
                "max_value_len must be in 1..={}, got {}",
                MAX_FIELD_LEN, self.max_value_len
            )));
        }
        if self.capacity == 0 {
            return Err(StoreError::Config("capacity must be non-zero".to_string()));
        }
        if self.max_line_len == 0 {
            return Err(StoreError::Config("max_line_len must be non-zero".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the image file path
    pub fn image_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.image_path = path.into();
        self
    }

    /// Set the medium size (in bytes)
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Set the file sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    /// Set the maximum key length
    pub fn max_key_len(mut self, len: usize) -> Self {
        self.config.max_key_len = len;
        self
    }

    /// Set the maximum value length
    pub fn max_value_len(mut self, len: usize) -> Self {
        self.config.max_value_len = len;
        self
    }

    /// Set the corruption policy
    pub fn corruption_policy(mut self, policy: CorruptionPolicy) -> Self {
        self.config.corruption_policy = policy;
        self
    }

    /// Set the maximum console line length
    pub fn max_line_len(mut self, len: usize) -> Self {
        self.config.max_line_len = len;
        self
    }

    /// Set the console prompt
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.prompt = prompt.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

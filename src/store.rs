//! Key Store Module
//!
//! The public key/value operations, built on the record scanner and writer.
//!
//! ## Responsibilities
//! - Validate keys and values before touching the medium
//! - Enforce key uniqueness among ACTIVE records
//! - Append new records at the high-water mark
//! - Tombstone records in place, erase the whole medium
//!
//! Every operation rescans from address 0; no index is cached between
//! calls, so the medium is the only state.

use crate::config::{Config, CorruptionPolicy};
use crate::dump;
use crate::error::{Result, StoreError};
use crate::medium::Medium;
use crate::protocol::{Command, Response};
use crate::record::{
    record_span, verify_log, LogEnd, LogReport, Record, RecordHeader, RecordWriter, Scan,
    Scanner, Visit,
};

/// A key/value store living on a medium
///
/// ## Space Model
/// - WRITE appends; FORGET flips one tag byte to TOMBSTONE
/// - Tombstoned space is never reused until CLEAR erases the medium
/// - The high-water mark therefore only grows between erases
///
/// ## Access Model
/// One caller at a time: mutations take `&mut self`, lookups `&self`.
pub struct KeyStore<M: Medium> {
    /// Store configuration
    config: Config,

    /// The medium holding the log
    medium: M,
}

impl<M: Medium> KeyStore<M> {
    /// Open a store over `medium`.
    ///
    /// The medium's capacity must match `config.capacity`. The log is
    /// walked once so its state shows up in the logs.
    pub fn open(medium: M, config: Config) -> Result<Self> {
        config.validate()?;
        if medium.capacity() != config.capacity {
            return Err(StoreError::Config(format!(
                "medium holds {} bytes, config expects {}",
                medium.capacity(),
                config.capacity
            )));
        }

        let report = verify_log(&medium)?;
        tracing::info!(
            "Opened store: {} active, {} tombstoned, high-water 0x{:04x}, {} bytes free",
            report.active_records,
            report.tombstoned_records,
            report.high_water,
            report.free_bytes
        );
        if let Some((addr, cause)) = report.corruption {
            tracing::warn!("Log damaged at 0x{:04x}: {}", addr, cause);
        }

        Ok(Self { config, medium })
    }

    /// Open with default limits sized to the medium
    pub fn with_defaults(medium: M) -> Result<Self> {
        let config = Config::builder().capacity(medium.capacity()).build();
        Self::open(medium, config)
    }

    /// Execute a command
    ///
    /// Domain outcomes become responses; only medium failures are errors.
    pub fn execute(&mut self, command: Command) -> Result<Response> {
        tracing::trace!("Executing {:?}", command.command_type());

        let result = match command {
            Command::Read { key } => match self.read(&key) {
                Ok(Some(value)) => Ok(Response::Value(value)),
                Ok(None) | Err(StoreError::InvalidKey { .. }) => Ok(Response::Empty),
                Err(e) => Err(e),
            },
            Command::Write { key, value } => self.write(&key, &value).map(|_| Response::Done),
            Command::Forget { key } => match self.forget(&key) {
                Err(StoreError::InvalidKey { .. }) => Ok(Response::NotFound),
                other => other.map(|()| Response::Done),
            },
            Command::Print => self.dump().map(Response::Dump),
            Command::Clear => self.clear().map(|_| Response::Done),
        };

        result.or_else(|e| match e {
            StoreError::InvalidKey { .. } => Ok(Response::InvalidKey),
            StoreError::InvalidValue { .. } => Ok(Response::InvalidValue),
            StoreError::AlreadyExists => Ok(Response::AlreadyExists),
            StoreError::NotFound => Ok(Response::NotFound),
            StoreError::NoSpaceLeft { .. } => Ok(Response::NoSpaceLeft),
            StoreError::Corrupted { addr, .. } => Ok(Response::Corrupted { addr }),
            other => Err(other),
        })
    }

    /// Get the value stored under `key`
    ///
    /// Returns `Ok(None)` when no ACTIVE record carries the key.
    pub fn read(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        self.check_key(key)?;

        match self.find(key)? {
            Some(header) => {
                let record = Record::read(&self.medium, &header)?;
                tracing::debug!(
                    "READ hit at 0x{:04x} ({} bytes)",
                    header.addr,
                    record.value.len()
                );
                Ok(Some(record.value))
            }
            None => Ok(None),
        }
    }

    /// Store a new key/value pair, returning the record's address
    ///
    /// Checks, in order:
    /// 1. key length in 1..=max_key_len
    /// 2. value length in 1..=max_value_len
    /// 3. key not already ACTIVE
    /// 4. record fits between the high-water mark and the end of the medium
    ///
    /// When the log ends at a damaged record, everything from the damage
    /// to the end of the medium is erased before the append.
    pub fn write(&mut self, key: &[u8], value: &[u8]) -> Result<usize> {
        self.check_key(key)?;
        if value.is_empty() || value.len() > self.config.max_value_len {
            return Err(StoreError::InvalidValue { len: value.len() });
        }

        if self.find(key)?.is_some() {
            return Err(StoreError::AlreadyExists);
        }

        let end = Scanner::new(&self.medium).log_end()?;
        let addr = self.resolve_end(end)?;
        let needed = record_span(key.len(), value.len());
        let available = self.medium.capacity() - addr;
        if needed > available {
            tracing::debug!("WRITE needs {} bytes, {} left", needed, available);
            return Err(StoreError::NoSpaceLeft { needed, available });
        }

        let mut writer = RecordWriter::new(&mut self.medium);
        if let LogEnd::Corrupted { .. } = end {
            // Stale records past the damage must not resurface behind the new one
            let rewritten = writer.erase_from(addr)?;
            tracing::warn!(
                "Discarded damaged tail at 0x{:04x} ({} bytes rewritten)",
                addr,
                rewritten
            );
        }
        writer.append(addr, &Record::active(key, value))?;
        Ok(addr)
    }

    /// Tombstone the ACTIVE record carrying `key`
    ///
    /// Only the tag byte is rewritten; the space stays consumed.
    pub fn forget(&mut self, key: &[u8]) -> Result<()> {
        self.check_key(key)?;

        let header = self.find(key)?.ok_or(StoreError::NotFound)?;
        RecordWriter::new(&mut self.medium).tombstone(header.addr)
    }

    /// Erase the whole medium
    ///
    /// Returns what the log held before the erase.
    pub fn clear(&mut self) -> Result<LogReport> {
        let report = verify_log(&self.medium)?;
        let rewritten = RecordWriter::new(&mut self.medium).erase()?;
        tracing::info!(
            "Erased medium: {} records discarded, {} bytes rewritten",
            report.record_count(),
            rewritten
        );
        Ok(report)
    }

    /// First free address (the high-water mark)
    ///
    /// Space held by tombstones counts as used.
    pub fn free_space(&self) -> Result<usize> {
        let end = Scanner::new(&self.medium).log_end()?;
        self.resolve_end(end)
    }

    /// Bytes left for new records
    pub fn remaining(&self) -> Result<usize> {
        Ok(self.medium.capacity() - self.free_space()?)
    }

    /// Walk the log and summarise it
    ///
    /// Reports corruption instead of failing on it, whatever the policy.
    pub fn verify(&self) -> Result<LogReport> {
        verify_log(&self.medium)
    }

    /// Hex dump of the used region, rounded up to whole lines
    pub fn dump(&self) -> Result<Vec<String>> {
        let high_water = self.free_space()?;
        dump::hexdump(&self.medium, dump::line_boundary(high_water))
    }

    /// Hex dump of the entire medium
    pub fn dump_all(&self) -> Result<Vec<String>> {
        dump::hexdump(&self.medium, self.medium.capacity())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn medium(&self) -> &M {
        &self.medium
    }

    /// Close the store and hand back the medium
    pub fn into_medium(self) -> M {
        self.medium
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn check_key(&self, key: &[u8]) -> Result<()> {
        if key.is_empty() || key.len() > self.config.max_key_len {
            return Err(StoreError::InvalidKey { len: key.len() });
        }
        Ok(())
    }

    /// Locate the ACTIVE record carrying `key`
    fn find(&self, key: &[u8]) -> Result<Option<RecordHeader>> {
        let scan = Scanner::new(&self.medium).run(|header| {
            if !header.is_active() || header.key_len as usize != key.len() {
                return Ok(Visit::Continue);
            }
            if self.key_matches(header, key)? {
                Ok(Visit::Stop(*header))
            } else {
                Ok(Visit::Continue)
            }
        })?;

        match scan {
            Scan::Stopped(header) => Ok(Some(header)),
            Scan::Ended(end) => {
                self.resolve_end(end)?;
                Ok(None)
            }
        }
    }

    /// Compare stored key bytes, stopping at the first mismatch
    fn key_matches(&self, header: &RecordHeader, key: &[u8]) -> Result<bool> {
        for (i, &expected) in key.iter().enumerate() {
            if self.medium.read_byte(header.key_addr() + i)? != expected {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Apply the corruption policy to the end of a scan
    fn resolve_end(&self, end: LogEnd) -> Result<usize> {
        match (end, self.config.corruption_policy) {
            (LogEnd::Corrupted { addr, cause }, CorruptionPolicy::Reject) => {
                Err(StoreError::Corrupted { addr, cause })
            }
            (end, _) => Ok(end.high_water()),
        }
    }
}

//! File-backed medium
//!
//! Persists the medium as a fixed-size image file so data survives restarts.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::{check_addr, Medium, ERASED};
use crate::config::SyncStrategy;
use crate::error::{Result, StoreError};

/// A medium stored in an image file of exactly `capacity` bytes.
///
/// ## Durability
/// - `SyncStrategy::EveryWrite`: `sync_data()` after every byte
/// - `SyncStrategy::EveryOperation`: `sync_data()` on [`Medium::flush`]
///
/// Reads go through a `Mutex<File>` because seeking needs exclusive access
/// to the handle while `read_byte` only borrows the medium.
#[derive(Debug)]
pub struct FileMedium {
    path: PathBuf,
    file: Mutex<File>,
    capacity: usize,
    sync_strategy: SyncStrategy,
}

impl FileMedium {
    /// Open or create an image file.
    ///
    /// A missing file is created erased (all 0xFF). An existing file must
    /// be exactly `capacity` bytes long.
    pub fn open(path: &Path, capacity: usize, sync_strategy: SyncStrategy) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;

        let len = file.metadata()?.len();
        if len == 0 {
            tracing::info!("Creating erased image {} ({} bytes)", path.display(), capacity);
            file.write_all(&vec![ERASED; capacity])?;
            file.sync_all()?;
        } else if len != capacity as u64 {
            return Err(StoreError::Config(format!(
                "image {} is {} bytes, expected {}",
                path.display(),
                len,
                capacity
            )));
        }

        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
            capacity,
            sync_strategy,
        })
    }

    /// Path of the image file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Medium for FileMedium {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn read_byte(&self, addr: usize) -> Result<u8> {
        check_addr(addr, self.capacity)?;
        let mut file = self.file.lock();
        file.seek(SeekFrom::Start(addr as u64))?;
        let mut byte = [0u8; 1];
        file.read_exact(&mut byte)?;
        Ok(byte[0])
    }

    fn write_byte(&mut self, addr: usize, byte: u8) -> Result<()> {
        check_addr(addr, self.capacity)?;
        let file = self.file.get_mut();
        file.seek(SeekFrom::Start(addr as u64))?;
        file.write_all(&[byte])?;
        if self.sync_strategy == SyncStrategy::EveryWrite {
            file.sync_data()?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        let file = self.file.get_mut();
        file.flush()?;
        file.sync_data()?;
        Ok(())
    }

    fn read_range(&self, addr: usize, len: usize) -> Result<Vec<u8>> {
        if len == 0 {
            return Ok(Vec::new());
        }
        check_addr(addr + len - 1, self.capacity)?;
        let mut file = self.file.lock();
        file.seek(SeekFrom::Start(addr as u64))?;
        let mut buffer = vec![0u8; len];
        file.read_exact(&mut buffer)?;
        Ok(buffer)
    }
}

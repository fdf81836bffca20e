//! Tests for FileMedium

use std::fs;

use eepromkv::config::SyncStrategy;
use eepromkv::medium::{FileMedium, Medium, ERASED};
use eepromkv::StoreError;
use tempfile::TempDir;

#[test]
fn test_open_creates_erased_image() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("eeprom.bin");

    let medium = FileMedium::open(&path, 1024, SyncStrategy::EveryOperation).unwrap();

    assert_eq!(medium.capacity(), 1024);
    assert_eq!(medium.path(), path.as_path());
    let image = fs::read(&path).unwrap();
    assert_eq!(image.len(), 1024);
    assert!(image.iter().all(|&b| b == ERASED));
}

#[test]
fn test_writes_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("eeprom.bin");

    {
        let mut medium = FileMedium::open(&path, 256, SyncStrategy::EveryWrite).unwrap();
        medium.write_byte(0, 0x7F).unwrap();
        medium.write_byte(255, 0x00).unwrap();
        medium.flush().unwrap();
    }

    let medium = FileMedium::open(&path, 256, SyncStrategy::EveryOperation).unwrap();
    assert_eq!(medium.read_byte(0).unwrap(), 0x7F);
    assert_eq!(medium.read_byte(1).unwrap(), ERASED);
    assert_eq!(medium.read_byte(255).unwrap(), 0x00);
    assert_eq!(medium.read_range(0, 2).unwrap(), vec![0x7F, ERASED]);
}

#[test]
fn test_size_mismatch_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("eeprom.bin");
    fs::write(&path, vec![ERASED; 512]).unwrap();

    let result = FileMedium::open(&path, 1024, SyncStrategy::EveryOperation);

    assert!(matches!(result, Err(StoreError::Config(_))));
}

#[test]
fn test_out_of_range_write_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("eeprom.bin");
    let mut medium = FileMedium::open(&path, 32, SyncStrategy::EveryOperation).unwrap();

    assert!(matches!(
        medium.write_byte(32, 0),
        Err(StoreError::AddressOutOfRange { addr: 32, capacity: 32 })
    ));
    assert_eq!(fs::metadata(&path).unwrap().len(), 32);
}

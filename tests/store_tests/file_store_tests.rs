//! Tests for a store over a file-backed medium

use std::fs;

use eepromkv::config::{Config, SyncStrategy};
use eepromkv::{FileMedium, KeyStore};
use tempfile::TempDir;

fn open_store(config: &Config) -> KeyStore<FileMedium> {
    let medium =
        FileMedium::open(&config.image_path, config.capacity, config.sync_strategy).unwrap();
    KeyStore::open(medium, config.clone()).unwrap()
}

#[test]
fn test_data_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .image_path(temp_dir.path().join("eeprom.bin"))
        .build();

    {
        let mut store = open_store(&config);
        store.write(b"a", b"1").unwrap();
        store.write(b"b", b"2").unwrap();
        store.forget(b"a").unwrap();
    }

    let store = open_store(&config);
    assert_eq!(store.read(b"a").unwrap(), None);
    assert_eq!(store.read(b"b").unwrap(), Some(b"2".to_vec()));
    assert_eq!(store.free_space().unwrap(), 10);
}

#[test]
fn test_image_layout_is_bit_exact() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .image_path(temp_dir.path().join("eeprom.bin"))
        .sync_strategy(SyncStrategy::EveryWrite)
        .build();

    let mut store = open_store(&config);
    store.write(b"key", b"val").unwrap();
    store.forget(b"key").unwrap();
    drop(store);

    let image = fs::read(&config.image_path).unwrap();
    assert_eq!(image.len(), 1024);
    assert_eq!(&image[..10], &[0x00, 3, b'k', b'e', b'y', 3, b'v', b'a', b'l', 0xFF]);
}

#[test]
fn test_clear_persists() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .image_path(temp_dir.path().join("eeprom.bin"))
        .build();

    {
        let mut store = open_store(&config);
        store.write(b"a", b"1").unwrap();
        store.clear().unwrap();
    }

    let image = fs::read(&config.image_path).unwrap();
    assert!(image.iter().all(|&b| b == 0xFF));
    assert_eq!(open_store(&config).read(b"a").unwrap(), None);
}

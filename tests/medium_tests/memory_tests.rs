//! Tests for MemoryMedium

use eepromkv::medium::{Medium, MemoryMedium, ERASED};
use eepromkv::StoreError;

#[test]
fn test_new_medium_is_erased() {
    let medium = MemoryMedium::new(64);

    assert_eq!(medium.capacity(), 64);
    assert!(medium.as_bytes().iter().all(|&b| b == ERASED));
    assert_eq!(medium.write_count(), 0);
}

#[test]
fn test_write_then_read() {
    let mut medium = MemoryMedium::new(16);

    medium.write_byte(3, 0x42).unwrap();

    assert_eq!(medium.read_byte(3).unwrap(), 0x42);
    assert_eq!(medium.read_byte(4).unwrap(), ERASED);
    assert_eq!(medium.write_count(), 1);
}

#[test]
fn test_out_of_range_access_fails() {
    let mut medium = MemoryMedium::new(16);

    assert!(matches!(
        medium.read_byte(16),
        Err(StoreError::AddressOutOfRange { addr: 16, capacity: 16 })
    ));
    assert!(matches!(
        medium.write_byte(100, 0),
        Err(StoreError::AddressOutOfRange { addr: 100, .. })
    ));
    assert!(medium.read_range(10, 7).is_err());
    assert_eq!(medium.write_count(), 0);
}

#[test]
fn test_update_byte_skips_identical_value() {
    let mut medium = MemoryMedium::new(8);

    assert!(!medium.update_byte(0, ERASED).unwrap());
    assert_eq!(medium.write_count(), 0);

    assert!(medium.update_byte(0, 0x7F).unwrap());
    assert!(!medium.update_byte(0, 0x7F).unwrap());
    assert_eq!(medium.write_count(), 1);
}

#[test]
fn test_read_range() {
    let medium = MemoryMedium::from_bytes(vec![1, 2, 3, 4, 5]);

    assert_eq!(medium.read_range(1, 3).unwrap(), vec![2, 3, 4]);
    assert_eq!(medium.read_range(5, 0).unwrap(), Vec::<u8>::new());
    assert_eq!(medium.read_range(0, 5).unwrap(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_into_bytes_returns_image() {
    let mut medium = MemoryMedium::new(4);
    medium.write_byte(1, 0x00).unwrap();

    assert_eq!(medium.into_bytes(), vec![ERASED, 0x00, ERASED, ERASED]);
}

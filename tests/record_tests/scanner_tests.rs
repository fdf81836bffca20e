//! Scanner Tests

use eepromkv::medium::MemoryMedium;
use eepromkv::record::{Corruption, LogEnd, RecordTag, Scan, Scanner, Visit};

use super::image;

const A1: &[u8] = &[0x7F, 0x01, b'a', 0x01, b'1'];
const B22: &[u8] = &[0x7F, 0x01, b'b', 0x02, b'2', b'2'];
const DEAD_C: &[u8] = &[0x00, 0x01, b'c', 0x01, b'3'];

#[test]
fn test_blank_medium_ends_at_zero() {
    let medium = MemoryMedium::new(1024);

    let end = Scanner::new(&medium).log_end().unwrap();

    assert_eq!(end, LogEnd::Clean { high_water: 0 });
}

#[test]
fn test_visits_records_in_order() {
    let medium = image(&[A1, DEAD_C, B22], 64);
    let mut seen = Vec::new();

    let scan = Scanner::new(&medium)
        .run(|header| {
            seen.push((header.addr, header.tag, header.key_len, header.value_len));
            Ok(Visit::<()>::Continue)
        })
        .unwrap();

    assert_eq!(scan, Scan::Ended(LogEnd::Clean { high_water: 16 }));
    assert_eq!(
        seen,
        vec![
            (0, RecordTag::Active, 1, 1),
            (5, RecordTag::Tombstone, 1, 1),
            (10, RecordTag::Active, 1, 2),
        ]
    );
}

#[test]
fn test_stop_returns_visitor_result() {
    let medium = image(&[A1, B22], 64);

    let scan = Scanner::new(&medium)
        .run(|header| {
            if header.key_len == 1 && header.value_len == 2 {
                Ok(Visit::Stop(header.addr))
            } else {
                Ok(Visit::Continue)
            }
        })
        .unwrap();

    assert_eq!(scan, Scan::Stopped(5));
}

#[test]
fn test_unknown_tag_stops_scan() {
    let medium = image(&[A1, &[0x42, 0x01, b'x', 0x01, b'y'], B22], 64);
    let mut visited = 0;

    let scan = Scanner::new(&medium)
        .run(|_| {
            visited += 1;
            Ok(Visit::<()>::Continue)
        })
        .unwrap();

    assert_eq!(visited, 1);
    assert_eq!(
        scan,
        Scan::Ended(LogEnd::Corrupted {
            addr: 5,
            cause: Corruption::UnknownTag(0x42)
        })
    );
}

#[test]
fn test_record_past_end_of_medium_is_corrupted() {
    // value length claims 200 bytes on a 16-byte medium
    let medium = image(&[A1, &[0x7F, 0x01, b'k', 200]], 16);

    let end = Scanner::new(&medium).log_end().unwrap();

    assert_eq!(
        end,
        LogEnd::Corrupted {
            addr: 5,
            cause: Corruption::Overrun { span: 204 }
        }
    );
    assert_eq!(end.high_water(), 5);
}

#[test]
fn test_header_cut_by_end_of_medium_is_corrupted() {
    let medium = image(&[A1, &[0x7F]], 6);

    let end = Scanner::new(&medium).log_end().unwrap();

    assert!(matches!(end, LogEnd::Corrupted { addr: 5, .. }));
}

#[test]
fn test_full_medium_ends_cleanly() {
    let medium = image(&[A1, A1], 10);

    let end = Scanner::new(&medium).log_end().unwrap();

    assert_eq!(end, LogEnd::Clean { high_water: 10 });
    assert!(end.corruption().is_none());
}

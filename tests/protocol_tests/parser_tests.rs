//! Parser Tests

use eepromkv::protocol::{parse_command, Command, CommandType};
use eepromkv::StoreError;

fn parse(line: &str) -> Command {
    parse_command(line.as_bytes()).unwrap().unwrap()
}

#[test]
fn test_parse_read() {
    assert_eq!(parse("READ a"), Command::Read { key: b"a".to_vec() });
    assert_eq!(parse(r#"READ "a""#), Command::Read { key: b"a".to_vec() });
}

#[test]
fn test_parse_write_quoted_and_bare() {
    assert_eq!(
        parse(r#"WRITE "a" "1""#),
        Command::Write { key: b"a".to_vec(), value: b"1".to_vec() }
    );
    assert_eq!(
        parse("WRITE a 1"),
        Command::Write { key: b"a".to_vec(), value: b"1".to_vec() }
    );
    assert_eq!(
        parse(r#"WRITE "first name" "Ada Lovelace""#),
        Command::Write {
            key: b"first name".to_vec(),
            value: b"Ada Lovelace".to_vec()
        }
    );
}

#[test]
fn test_missing_arguments_are_empty() {
    assert_eq!(parse("READ"), Command::Read { key: Vec::new() });
    assert_eq!(
        parse("WRITE k"),
        Command::Write { key: b"k".to_vec(), value: Vec::new() }
    );
    assert_eq!(parse("FORGET"), Command::Forget { key: Vec::new() });
}

#[test]
fn test_extra_arguments_are_ignored() {
    assert_eq!(parse("PRINT now please"), Command::Print);
    assert_eq!(parse("FORGET a b"), Command::Forget { key: b"a".to_vec() });
}

#[test]
fn test_parse_print_and_clear() {
    assert_eq!(parse("PRINT").command_type(), CommandType::Print);
    assert_eq!(parse("  CLEAR  ").command_type(), CommandType::Clear);
}

#[test]
fn test_blank_line_is_no_command() {
    assert_eq!(parse_command(b"").unwrap(), None);
    assert_eq!(parse_command(b"   \t ").unwrap(), None);
}

#[test]
fn test_command_words_are_case_sensitive() {
    assert!(matches!(
        parse_command(b"read a"),
        Err(StoreError::Protocol(_))
    ));
    assert!(matches!(
        parse_command(b"DELETE a"),
        Err(StoreError::Protocol(_))
    ));
}

#[test]
fn test_command_type_words_round_trip() {
    for ty in [
        CommandType::Read,
        CommandType::Write,
        CommandType::Forget,
        CommandType::Print,
        CommandType::Clear,
    ] {
        assert_eq!(CommandType::from_word(ty.word().as_bytes()), Some(ty));
    }
}

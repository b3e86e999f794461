//! Tests for the record ⇄ line format
//!
//! These tests verify:
//! - Serialization to three quoted percent-encoded fields
//! - Parsing, including the blank-line sentinel
//! - Corruption surfaced as errors, never skipped

use stash::{Record, StashError};

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn test_plain_record_line() {
    let record = Record::new(b"api_key".to_vec(), 1700000000, b"hunter2".to_vec());
    assert_eq!(record.to_line(), "api_key 1700000000 hunter2\n");
}

#[test]
fn test_unsafe_bytes_are_escaped_not_quoted() {
    // The percent layer removes everything the quote layer would object to,
    // so encoded fields are written bare.
    let record = Record::new(b"has space".to_vec(), 5, b"line\nbreak".to_vec());
    assert_eq!(record.to_line(), "has%20space 5 line%0Abreak\n");
}

#[test]
fn test_empty_key_and_value_stay_visible() {
    let record = Record::new(Vec::new(), 5, Vec::new());
    assert_eq!(record.to_line(), "'' 5 ''\n");
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn test_parse_round_trip() {
    let cases = vec![
        Record::new(b"k".to_vec(), 0, b"v".to_vec()),
        Record::new(b"with space".to_vec(), 1700000000, b"multi\nline".to_vec()),
        Record::new(Vec::new(), 42, b"\x00\xff".to_vec()),
        Record::new("clé \u{1F511}".as_bytes().to_vec(), 9, "mot de passe".as_bytes().to_vec()),
    ];

    for record in cases {
        let line = record.to_line();
        let parsed = Record::parse_line(&line).unwrap().unwrap();
        assert_eq!(parsed, record, "round-trip of {}", line.trim_end());
    }
}

#[test]
fn test_parse_accepts_missing_trailing_newline() {
    let parsed = Record::parse_line("k 7 v").unwrap().unwrap();
    assert_eq!(parsed, Record::new(b"k".to_vec(), 7, b"v".to_vec()));
}

#[test]
fn test_parse_foreign_quoting_styles() {
    // Hand-written lines may quote differently than our serializer does
    let parsed = Record::parse_line("\"k\" '7' va'lu'e\n").unwrap().unwrap();
    assert_eq!(parsed, Record::new(b"k".to_vec(), 7, b"value".to_vec()));
}

#[test]
fn test_parse_blank_line_is_sentinel() {
    assert!(Record::parse_line("").unwrap().is_none());
    assert!(Record::parse_line("\n").unwrap().is_none());
    assert!(Record::parse_line("   \t \n").unwrap().is_none());
}

// =============================================================================
// Corruption
// =============================================================================

#[test]
fn test_parse_wrong_field_count_is_error() {
    assert!(matches!(
        Record::parse_line("only two\n"),
        Err(StashError::Decode(_))
    ));
    assert!(matches!(
        Record::parse_line("a 1 b extra\n"),
        Err(StashError::Decode(_))
    ));
}

#[test]
fn test_parse_bad_timestamp_is_error() {
    assert!(matches!(
        Record::parse_line("k soon v\n"),
        Err(StashError::Decode(_))
    ));
    assert!(matches!(
        Record::parse_line("k -5 v\n"),
        Err(StashError::Decode(_))
    ));
}

#[test]
fn test_parse_bad_escape_is_error() {
    assert!(matches!(
        Record::parse_line("k 5 %Z9\n"),
        Err(StashError::Decode(_))
    ));
    assert!(matches!(
        Record::parse_line("'k 5 v\n"),
        Err(StashError::Decode(_))
    ));
}

use crate::{is_valid_email, normalize_email, validate_display_name};

#[test]
fn test_is_valid_email_accepts_common_addresses() {
    assert!(is_valid_email("player@example.com"));
    assert!(is_valid_email("first.last+dice@mail.example.org"));
    assert!(is_valid_email("  padded@example.com  "));
}

#[test]
fn test_is_valid_email_rejects_malformed_addresses() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("player"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("player@"));
    assert!(!is_valid_email("player@localhost"));
    assert!(!is_valid_email("player@@example.com"));
    assert!(!is_valid_email("pla yer@example.com"));
    assert!(!is_valid_email("player@.example.com"));
    assert!(!is_valid_email("player@example.com."));
}

#[test]
fn test_normalize_email() {
    assert_eq!(normalize_email("  Player@Example.COM "), "player@example.com");
}

#[test]
fn test_validate_display_name() {
    assert!(validate_display_name("Player One", 32).is_ok());
    assert!(validate_display_name("", 32).is_err());
    assert!(validate_display_name("   ", 32).is_err());
    assert!(validate_display_name("abcdef", 5).is_err());
    assert!(validate_display_name("bad\nname", 32).is_err());
}

#[test]
fn test_validate_display_name_counts_characters_not_bytes() {
    // Five characters, ten bytes
    assert!(validate_display_name("ÄÖÜßé", 5).is_ok());
}

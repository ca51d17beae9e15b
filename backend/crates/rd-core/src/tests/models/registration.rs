use crate::{CoreError, Registration};

const MAX_NAME: usize = 32;

fn field_of(result: crate::Result<()>) -> Option<String> {
    match result {
        Err(CoreError::Validation { field, .. }) => field,
        _ => None,
    }
}

#[test]
fn test_registration_valid() {
    let registration = Registration::new("player@example.com", "Player", "secret1")
        .with_confirmation("secret1");

    assert!(registration.validate(MAX_NAME).is_ok());
}

#[test]
fn test_registration_without_confirmation_skips_match_check() {
    let registration = Registration::new("player@example.com", "Player", "secret1");

    assert!(registration.password_confirmation.is_none());
    assert!(registration.validate(MAX_NAME).is_ok());
}

#[test]
fn test_registration_empty_fields() {
    let missing_email = Registration::new("", "Player", "secret1");
    let missing_name = Registration::new("player@example.com", "  ", "secret1");
    let missing_password = Registration::new("player@example.com", "Player", "");

    assert_eq!(field_of(missing_email.validate(MAX_NAME)).as_deref(), Some("email"));
    assert_eq!(
        field_of(missing_name.validate(MAX_NAME)).as_deref(),
        Some("display_name")
    );
    assert_eq!(
        field_of(missing_password.validate(MAX_NAME)).as_deref(),
        Some("password")
    );
}

#[test]
fn test_registration_confirmation_mismatch() {
    let registration = Registration::new("player@example.com", "Player", "secret1")
        .with_confirmation("secret2");

    let result = registration.validate(MAX_NAME);

    match result {
        Err(CoreError::Validation { message, field, .. }) => {
            assert_eq!(message, "Password doesn't match");
            assert_eq!(field.as_deref(), Some("password_confirmation"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_registration_malformed_email() {
    let registration = Registration::new("not-an-email", "Player", "secret1");

    assert_eq!(field_of(registration.validate(MAX_NAME)).as_deref(), Some("email"));
}

#[test]
fn test_registration_display_name_too_long() {
    let long_name = "x".repeat(MAX_NAME + 1);
    let registration = Registration::new("player@example.com", long_name, "secret1");

    assert_eq!(
        field_of(registration.validate(MAX_NAME)).as_deref(),
        Some("display_name")
    );
}

#[test]
fn test_registration_debug_redacts_password() {
    let registration = Registration::new("player@example.com", "Player", "hunter22");

    let debug = format!("{:?}", registration);

    assert!(!debug.contains("hunter22"));
    assert!(debug.contains("player@example.com"));
}

//! Input checks shared by registration, sign-in and profile updates.
//!
//! Everything here runs before any call to the identity provider or the
//! account store.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

pub const MAX_EMAIL_LENGTH: usize = 254;

/// Trim and lowercase an email so lookups are case-insensitive
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Structural email check: one `@`, non-empty local part, dotted domain
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || email.len() > MAX_EMAIL_LENGTH {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Reject blank input with a short user-facing message
#[track_caller]
pub fn require_non_empty(value: &str, field: &str, message: &str) -> CoreErrorResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation {
            message: message.to_string(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}

/// Display names must be non-blank, bounded and free of control characters
#[track_caller]
pub fn validate_display_name(name: &str, max_length: usize) -> CoreErrorResult<()> {
    require_non_empty(name, "display_name", "Missing Username")?;

    if name.trim().chars().count() > max_length {
        return Err(CoreError::Validation {
            message: format!("Username must be at most {} characters", max_length),
            field: Some("display_name".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if name.chars().any(char::is_control) {
        return Err(CoreError::Validation {
            message: "Username contains invalid characters".to_string(),
            field: Some("display_name".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}

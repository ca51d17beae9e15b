use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Strength requirements enforced when an identity is created
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    pub min_length: usize,
}

impl PasswordPolicy {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    #[track_caller]
    pub fn check(&self, password: &str) -> AuthErrorResult<()> {
        let length = password.chars().count();

        if length < self.min_length {
            return Err(AuthError::WeakPassword {
                message: format!(
                    "password must be at least {} characters",
                    self.min_length
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if length > MAX_PASSWORD_LENGTH {
            return Err(AuthError::WeakPassword {
                message: format!(
                    "password must be at most {} characters",
                    MAX_PASSWORD_LENGTH
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if password.trim().is_empty() {
            return Err(AuthError::WeakPassword {
                message: "password cannot be only whitespace".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PASSWORD_LENGTH)
    }
}

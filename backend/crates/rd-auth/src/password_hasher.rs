//! Argon2id password hashing.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use error_location::ErrorLocation;

/// Hash a password into a PHC string (algorithm, params and salt included)
#[track_caller]
pub fn hash_password(password: &str) -> AuthErrorResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// `Ok(false)` for a wrong password, `Err` only for an unreadable stored hash
#[track_caller]
pub fn verify_password(password: &str, password_hash: &str) -> AuthErrorResult<bool> {
    let parsed = PasswordHash::new(password_hash).map_err(|e| AuthError::PasswordHash {
        message: format!("stored hash is not a valid PHC string: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

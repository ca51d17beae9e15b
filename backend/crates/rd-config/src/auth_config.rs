use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_JWT_SECRET_BYTES: usize = 32;

pub const MIN_TOKEN_TTL_SECS: u64 = 60;
pub const MAX_TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

/// Session token and credential policy settings
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Required to serve.
    pub jwt_secret: Option<String>,
    pub token_ttl_secs: u64,
    pub min_password_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("min_password_length", &self.min_password_length)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(secret) = &self.jwt_secret
            && secret.len() < MIN_JWT_SECRET_BYTES
        {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} bytes",
                MIN_JWT_SECRET_BYTES
            )));
        }

        if self.token_ttl_secs < MIN_TOKEN_TTL_SECS || self.token_ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_secs must be {}-{}, got {}",
                MIN_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS, self.token_ttl_secs
            )));
        }

        if self.min_password_length < MIN_PASSWORD_LENGTH
            || self.min_password_length > MAX_PASSWORD_LENGTH
        {
            return Err(ConfigError::auth(format!(
                "auth.min_password_length must be {}-{}, got {}",
                MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH, self.min_password_length
            )));
        }

        Ok(())
    }

    /// The signing secret, or an error when the server cannot issue tokens
    pub fn require_jwt_secret(&self) -> ConfigErrorResult<&str> {
        self.jwt_secret
            .as_deref()
            .ok_or_else(|| ConfigError::auth("auth.jwt_secret (or RD_AUTH_JWT_SECRET) is required"))
    }
}

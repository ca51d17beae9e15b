use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

/// Clock skew tolerated when checking `exp`
const LEEWAY_SECS: u64 = 30;

/// Issues and validates HS256 session tokens handed out at sign-in
pub struct SessionTokens {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl SessionTokens {
    pub fn with_hs256(secret: &[u8], ttl_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = LEEWAY_SECS;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl_secs: i64::try_from(ttl_secs).unwrap_or(i64::MAX),
        }
    }

    /// Sign a token for `identity_id` valid for the configured lifetime
    #[track_caller]
    pub fn issue(&self, identity_id: Uuid) -> AuthErrorResult<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: identity_id.to_string(),
            exp: now.saturating_add(self.ttl_secs),
            iat: now,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|source| {
            AuthError::JwtEncode {
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Validate a token and return its claims
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    /// Parse an `Authorization` header value of the form `Bearer <token>`
    #[track_caller]
    pub fn validate_bearer(&self, header_value: &str) -> AuthErrorResult<Uuid> {
        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or_else(|| AuthError::InvalidScheme {
                location: ErrorLocation::from(Location::caller()),
            })?
            .trim();

        if token.is_empty() {
            return Err(AuthError::InvalidToken {
                message: "empty bearer token".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.validate(token)?.identity_id()
    }
}

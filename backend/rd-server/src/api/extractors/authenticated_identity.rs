//! Bearer token extractor for the `/api/v1/me` routes

use crate::{ApiError, AppState};

use rd_auth::AuthError;

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use error_location::ErrorLocation;
use uuid::Uuid;

/// Identity id taken from a valid `Authorization: Bearer <token>` header
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedIdentity(pub Uuid);

impl FromRequestParts<AppState> for AuthenticatedIdentity {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .ok_or_else(|| AuthError::MissingHeader {
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let header = header.to_str().map_err(|_| AuthError::InvalidToken {
                message: "authorization header is not valid UTF-8".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let identity_id = state.tokens.validate_bearer(header)?;
            log::debug!("Authenticated identity {}", identity_id);

            Ok(AuthenticatedIdentity(identity_id))
        }
    }
}

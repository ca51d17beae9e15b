//! REST API error types
//!
//! Every failure becomes `{ "error": { "code", "message", "field"? } }`.
//! `message` is always the short user-facing category, never internal text.

use rd_auth::AuthError;
use rd_service::ServiceError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "VALIDATION_ERROR")
    pub code: String,
    /// Short message suitable for showing to the player
    pub message: String,
    /// Field name if the error refers to a specific input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Failure reported by the account service
    #[error("{source}")]
    Service {
        source: ServiceError,
        location: ErrorLocation,
    },

    /// Missing, malformed or expired session token (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Too many sign-in attempts (429)
    #[error("Rate limited: {message} {location}")]
    RateLimited {
        message: String,
        location: ErrorLocation,
    },

    /// Body or query could not be parsed (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Service { source, .. } => service_status(source),
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn service_status(error: &ServiceError) -> StatusCode {
    match error {
        ServiceError::Validation { .. } => StatusCode::BAD_REQUEST,
        ServiceError::InvalidCredential { .. } => StatusCode::UNAUTHORIZED,
        ServiceError::DuplicateIdentity { .. } => StatusCode::CONFLICT,
        ServiceError::WeakCredential { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        ServiceError::UnknownIdentity { .. } => StatusCode::NOT_FOUND,
        ServiceError::Persistence { .. } => StatusCode::SERVICE_UNAVAILABLE,
        ServiceError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let body = match self {
            ApiError::Service { source, .. } => ApiErrorBody {
                code: source.error_code().into(),
                message: source.user_message(),
                field: source.field().map(str::to_string),
            },
            ApiError::Unauthorized { .. } => ApiErrorBody {
                code: "UNAUTHORIZED".into(),
                message: "Please sign in again".into(),
                field: None,
            },
            ApiError::RateLimited { .. } => ApiErrorBody {
                code: "RATE_LIMITED".into(),
                message: "Too many attempts, try again later".into(),
                field: None,
            },
            ApiError::BadRequest { message, .. } => ApiErrorBody {
                code: "BAD_REQUEST".into(),
                message,
                field: None,
            },
            ApiError::Internal { .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message: "Something went wrong".into(),
                field: None,
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<ServiceError> for ApiError {
    #[track_caller]
    fn from(source: ServiceError) -> Self {
        ApiError::Service {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::RateLimitExceeded { .. } => ApiError::RateLimited {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            e if e.is_unauthorized() => ApiError::Unauthorized {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            e => ApiError::Internal {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        ApiError::bad_request(format!("Invalid request body: {}", e.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    #[track_caller]
    fn from(e: QueryRejection) -> Self {
        ApiError::bad_request(format!("Invalid query: {}", e.body_text()))
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

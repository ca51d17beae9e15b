use rd_auth::AuthError;
use rd_core::CoreError;
use rd_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

/// Failures surfaced by the account service.
///
/// `Display` carries internal detail for logs. Clients get `user_message()`.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid credentials {location}")]
    InvalidCredential { location: ErrorLocation },

    #[error("Identity already exists {location}")]
    DuplicateIdentity { location: ErrorLocation },

    #[error("Weak credential: {message} {location}")]
    WeakCredential {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unknown identity {identity_id} {location}")]
    UnknownIdentity {
        identity_id: Uuid,
        location: ErrorLocation,
    },

    #[error("Persistence error: {message} {location}")]
    Persistence {
        message: String,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ServiceError {
    #[track_caller]
    pub fn invalid_credential() -> Self {
        Self::InvalidCredential {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown_identity(identity_id: Uuid) -> Self {
        Self::UnknownIdentity {
            identity_id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn persistence(message: impl std::fmt::Display) -> Self {
        Self::Persistence {
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl std::fmt::Display) -> Self {
        Self::Internal {
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::InvalidCredential { .. } => "INVALID_CREDENTIALS",
            Self::DuplicateIdentity { .. } => "DUPLICATE_IDENTITY",
            Self::WeakCredential { .. } => "WEAK_CREDENTIAL",
            Self::UnknownIdentity { .. } => "UNKNOWN_IDENTITY",
            Self::Persistence { .. } => "PERSISTENCE_ERROR",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Short category shown to players. Never contains internal error text.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::InvalidCredential { .. } => "Wrong credentials".to_string(),
            Self::DuplicateIdentity { .. } => "Email Already Registered".to_string(),
            Self::WeakCredential { .. } => "Weak Password".to_string(),
            Self::UnknownIdentity { .. } => "Account does not exist".to_string(),
            Self::Persistence { .. } => "Could not save your progress".to_string(),
            Self::Internal { .. } => "Something went wrong".to_string(),
        }
    }

    /// Input field the failure refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            Self::WeakCredential { .. } => Some("password"),
            Self::DuplicateIdentity { .. } => Some("email"),
            _ => None,
        }
    }
}

impl From<CoreError> for ServiceError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        let (message, field) = match err {
            CoreError::Validation { message, field, .. } => (message, field),
            CoreError::InvalidOutcome { value, .. } => (
                format!("Unknown outcome '{}'", value),
                Some("outcome".to_string()),
            ),
        };

        Self::Validation {
            message,
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for ServiceError {
    #[track_caller]
    fn from(err: DbError) -> Self {
        match err {
            DbError::DuplicateKey { .. } => Self::DuplicateIdentity {
                location: ErrorLocation::from(Location::caller()),
            },
            other => Self::persistence(other),
        }
    }
}

impl From<AuthError> for ServiceError {
    #[track_caller]
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::WeakPassword { message, .. } => Self::WeakCredential {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            other if other.is_unauthorized() => Self::invalid_credential(),
            other => Self::internal(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;

use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid outcome: {value} {location}")]
    InvalidOutcome {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Field name for validation failures tied to a specific input
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;

use crate::models::validation::{is_valid_email, require_non_empty, validate_display_name};
use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Sign-up input as collected by the client
#[derive(Clone)]
pub struct Registration {
    pub email: String,
    pub display_name: String,
    pub password: String,
    /// Second copy of the password, when the client asks for one
    pub password_confirmation: Option<String>,
}

impl Registration {
    pub fn new(
        email: impl Into<String>,
        display_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            display_name: display_name.into(),
            password: password.into(),
            password_confirmation: None,
        }
    }

    pub fn with_confirmation(mut self, confirmation: impl Into<String>) -> Self {
        self.password_confirmation = Some(confirmation.into());
        self
    }

    /// Local checks only. The password policy belongs to the identity provider.
    #[track_caller]
    pub fn validate(&self, max_display_name_length: usize) -> CoreErrorResult<()> {
        require_non_empty(&self.email, "email", "Missing Email")?;
        require_non_empty(&self.display_name, "display_name", "Missing Username")?;
        require_non_empty(&self.password, "password", "Missing Password")?;

        if let Some(confirmation) = &self.password_confirmation
            && confirmation != &self.password
        {
            return Err(CoreError::Validation {
                message: "Password doesn't match".to_string(),
                field: Some("password_confirmation".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !is_valid_email(&self.email) {
            return Err(CoreError::Validation {
                message: "Invalid Email".to_string(),
                field: Some("email".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        validate_display_name(&self.display_name, max_display_name_length)
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("email", &self.email)
            .field("display_name", &self.display_name)
            .field("password", &"<redacted>")
            .finish()
    }
}

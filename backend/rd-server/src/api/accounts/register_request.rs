use rd_core::Registration;

use serde::Deserialize;

/// Request body for creating an account
#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub display_name: String,
    pub password: String,

    /// Checked against `password` only when present
    #[serde(default)]
    pub password_confirmation: Option<String>,
}

impl From<RegisterRequest> for Registration {
    fn from(request: RegisterRequest) -> Self {
        let registration =
            Registration::new(request.email, request.display_name, request.password);

        match request.password_confirmation {
            Some(confirmation) => registration.with_confirmation(confirmation),
            None => registration,
        }
    }
}

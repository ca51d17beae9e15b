use rd_core::Credentials;

use serde::Deserialize;

/// Request body for signing in
#[derive(Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

impl From<SignInRequest> for Credentials {
    fn from(request: SignInRequest) -> Self {
        Credentials::new(request.email, request.password)
    }
}

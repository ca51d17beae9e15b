pub mod session_response;
#[allow(clippy::module_inception)]
pub mod sessions;
pub mod sign_in_request;

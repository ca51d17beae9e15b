#[allow(clippy::module_inception)]
pub mod accounts;
pub mod identity_dto;
pub mod identity_response;
pub mod register_request;

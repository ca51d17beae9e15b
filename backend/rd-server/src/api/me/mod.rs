pub mod account_dto;
pub mod account_response;
#[allow(clippy::module_inception)]
pub mod me;
pub mod record_outcome_request;
pub mod update_display_name_request;

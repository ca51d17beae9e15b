pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    accounts::{
        accounts::register, identity_dto::IdentityDto, identity_response::IdentityResponse,
        register_request::RegisterRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::authenticated_identity::AuthenticatedIdentity,
    leaderboard::{
        leaderboard::top_players, leaderboard_entry_dto::LeaderboardEntryDto,
        leaderboard_query::LeaderboardQuery, leaderboard_response::LeaderboardResponse,
    },
    me::{
        account_dto::AccountDto,
        account_response::AccountResponse,
        me::{get_account, record_outcome, update_display_name},
        record_outcome_request::RecordOutcomeRequest,
        update_display_name_request::UpdateDisplayNameRequest,
    },
    sessions::{
        session_response::SessionResponse, sessions::sign_in, sign_in_request::SignInRequest,
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;

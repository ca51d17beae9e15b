pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::account_record::{AccountRecord, DEFAULT_XP_LEVEL};
pub use models::credentials::Credentials;
pub use models::identity::Identity;
pub use models::leaderboard_entry::LeaderboardEntry;
pub use models::outcome::Outcome;
pub use models::registration::Registration;
pub use models::validation::{
    is_valid_email, normalize_email, require_non_empty, validate_display_name,
};

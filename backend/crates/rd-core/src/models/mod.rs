pub mod account_record;
pub mod credentials;
pub mod identity;
pub mod leaderboard_entry;
pub mod outcome;
pub mod registration;
pub mod validation;

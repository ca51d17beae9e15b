pub mod accounts;
pub mod error;
pub mod extractors;
pub mod leaderboard;
pub mod me;
pub mod sessions;

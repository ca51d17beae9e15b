#[allow(clippy::module_inception)]
pub mod leaderboard;
pub mod leaderboard_entry_dto;
pub mod leaderboard_query;
pub mod leaderboard_response;

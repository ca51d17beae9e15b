use serde::Deserialize;

/// Query parameters for the leaderboard
#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardQuery {
    /// Number of entries; clamped to the configured maximum
    pub limit: Option<u32>,
}

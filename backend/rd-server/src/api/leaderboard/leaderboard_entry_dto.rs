use rd_core::LeaderboardEntry;

use serde::{Deserialize, Serialize};

/// One leaderboard row. `rank` is the 1-based position in this response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntryDto {
    pub rank: usize,
    pub display_name: String,
    pub matches_played: i64,
    pub wins: i64,
    pub ties: i64,
    pub losses: i64,
}

impl LeaderboardEntryDto {
    pub fn ranked(rank: usize, entry: LeaderboardEntry) -> Self {
        Self {
            rank,
            display_name: entry.display_name,
            matches_played: entry.matches_played,
            wins: entry.wins,
            ties: entry.ties,
            losses: entry.losses,
        }
    }
}

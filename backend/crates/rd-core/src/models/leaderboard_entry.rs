use crate::AccountRecord;

use serde::{Deserialize, Serialize};

/// One row of the ranked leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub display_name: String,
    pub matches_played: i64,
    pub wins: i64,
    pub ties: i64,
    pub losses: i64,
}

impl From<&AccountRecord> for LeaderboardEntry {
    fn from(record: &AccountRecord) -> Self {
        Self {
            display_name: record.display_name.clone(),
            matches_played: record.matches_played,
            wins: record.wins,
            ties: record.ties,
            losses: record.losses,
        }
    }
}

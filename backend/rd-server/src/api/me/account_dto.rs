use rd_core::AccountRecord;

use serde::{Deserialize, Serialize};

/// Score record as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountDto {
    pub identity_id: String,
    pub display_name: String,
    pub matches_played: i64,
    pub wins: i64,
    pub ties: i64,
    pub losses: i64,
    pub xp_level: i32,
    /// Unix timestamp (seconds since epoch)
    pub updated_at: i64,
}

impl From<AccountRecord> for AccountDto {
    fn from(record: AccountRecord) -> Self {
        Self {
            identity_id: record.identity_id.to_string(),
            display_name: record.display_name,
            matches_played: record.matches_played,
            wins: record.wins,
            ties: record.ties,
            losses: record.losses,
            xp_level: record.xp_level,
            updated_at: record.updated_at.timestamp(),
        }
    }
}

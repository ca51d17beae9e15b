use crate::LeaderboardEntryDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub entries: Vec<LeaderboardEntryDto>,
}

use crate::{AccountStore, Result as ServiceResult};

use rd_core::LeaderboardEntry;

use std::sync::Arc;

use log::debug;

/// Read-only ranked view over the account store.
///
/// Each call re-queries the store and returns an owned snapshot. Accounts
/// with equal win counts come back in no particular order.
#[derive(Clone)]
pub struct Leaderboard {
    accounts: Arc<dyn AccountStore>,
    max_page_size: u32,
}

impl Leaderboard {
    pub fn new(accounts: Arc<dyn AccountStore>, max_page_size: u32) -> Self {
        Self {
            accounts,
            max_page_size,
        }
    }

    /// At most `min(limit, max_page_size)` entries, highest wins first
    pub async fn top_players(&self, limit: u32) -> ServiceResult<Vec<LeaderboardEntry>> {
        let limit = limit.min(self.max_page_size);
        if limit == 0 {
            return Ok(Vec::new());
        }

        let entries = self.accounts.top_by_wins(limit).await?;
        debug!("Leaderboard query returned {} of {} requested", entries.len(), limit);

        Ok(entries)
    }
}

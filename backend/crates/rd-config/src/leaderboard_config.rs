use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_PAGE_SIZE: u32 = 1;
pub const MAX_PAGE_SIZE_LIMIT: u32 = 1000;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LeaderboardConfig {
    /// Entries returned when the caller does not ask for a size
    pub default_page_size: u32,
    /// Upper bound on any requested size
    pub max_page_size: u32,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

impl LeaderboardConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_page_size < MIN_PAGE_SIZE || self.max_page_size > MAX_PAGE_SIZE_LIMIT {
            return Err(ConfigError::leaderboard(format!(
                "leaderboard.max_page_size must be {}-{}, got {}",
                MIN_PAGE_SIZE, MAX_PAGE_SIZE_LIMIT, self.max_page_size
            )));
        }

        if self.default_page_size < MIN_PAGE_SIZE || self.default_page_size > self.max_page_size
        {
            return Err(ConfigError::leaderboard(format!(
                "leaderboard.default_page_size must be {}-{} (max_page_size), got {}",
                MIN_PAGE_SIZE, self.max_page_size, self.default_page_size
            )));
        }

        Ok(())
    }
}

use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_DISPLAY_NAME_LENGTH_LIMIT: usize = 1;
pub const MAX_DISPLAY_NAME_LENGTH_LIMIT: usize = 256;
pub const DEFAULT_MAX_DISPLAY_NAME_LENGTH: usize = 32;

/// Input limits checked before anything reaches the store
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub max_display_name_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_display_name_length: DEFAULT_MAX_DISPLAY_NAME_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_display_name_length < MIN_DISPLAY_NAME_LENGTH_LIMIT
            || self.max_display_name_length > MAX_DISPLAY_NAME_LENGTH_LIMIT
        {
            return Err(ConfigError::config(format!(
                "validation.max_display_name_length must be {}-{}, got {}",
                MIN_DISPLAY_NAME_LENGTH_LIMIT,
                MAX_DISPLAY_NAME_LENGTH_LIMIT,
                self.max_display_name_length
            )));
        }

        Ok(())
    }
}

const DEFAULT_MAX_ATTEMPTS: u32 = 10;
const DEFAULT_WINDOW_SECS: u64 = 60;

/// Sign-in attempt budget per email
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub max_attempts: u32,
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            window_secs: DEFAULT_WINDOW_SECS,
        }
    }
}

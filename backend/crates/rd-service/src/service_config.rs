const DEFAULT_MAX_DISPLAY_NAME_LENGTH: usize = 32;
const DEFAULT_MAX_PAGE_SIZE: u32 = 100;

/// Limits the service enforces on its inputs
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub max_display_name_length: usize,
    /// Upper bound on leaderboard page size
    pub max_page_size: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_display_name_length: DEFAULT_MAX_DISPLAY_NAME_LENGTH,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

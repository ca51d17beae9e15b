pub mod claims;
pub mod error;
pub mod login_rate_limiter;
pub mod password_hasher;
pub mod password_policy;
pub mod rate_limit_config;
pub mod session_tokens;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use login_rate_limiter::LoginRateLimiter;
pub use password_hasher::{hash_password, verify_password};
pub use password_policy::PasswordPolicy;
pub use rate_limit_config::RateLimitConfig;
pub use session_tokens::SessionTokens;

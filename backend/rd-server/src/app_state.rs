use rd_auth::{LoginRateLimiter, PasswordPolicy, RateLimitConfig, SessionTokens};
use rd_config::Config;
use rd_db::{AccountRepository, IdentityRepository};
use rd_service::{AccountService, LocalIdentityProvider, ServiceConfig};

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::SqlitePool;

/// Shared handler state. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub service: AccountService,
    pub tokens: Arc<SessionTokens>,
    pub login_limiter: Arc<LoginRateLimiter>,
    /// Leaderboard size when the client does not pass `limit`
    pub default_page_size: u32,
    /// Present when a Prometheus recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Wire the service stack over `pool` from validated configuration
    pub fn new(
        pool: SqlitePool,
        config: &Config,
        jwt_secret: &str,
        metrics: Option<PrometheusHandle>,
    ) -> Self {
        let identities = LocalIdentityProvider::new(
            IdentityRepository::new(pool.clone()),
            PasswordPolicy::new(config.auth.min_password_length),
        );
        let accounts = AccountRepository::new(pool.clone());

        let service = AccountService::new(
            Arc::new(identities),
            Arc::new(accounts),
            ServiceConfig {
                max_display_name_length: config.validation.max_display_name_length,
                max_page_size: config.leaderboard.max_page_size,
            },
        );

        let login_limiter = LoginRateLimiter::new(RateLimitConfig {
            max_attempts: config.rate_limit.max_attempts,
            window_secs: config.rate_limit.window_secs,
        });

        Self {
            pool,
            service,
            tokens: Arc::new(SessionTokens::with_hs256(
                jwt_secret.as_bytes(),
                config.auth.token_ttl_secs,
            )),
            login_limiter: Arc::new(login_limiter),
            default_page_size: config.leaderboard.default_page_size,
            metrics,
        }
    }
}

pub mod account_service;
pub mod account_store;
pub mod error;
pub mod identity_provider;
pub mod leaderboard;
pub mod metrics;
pub mod service_config;
pub mod session;

pub use account_service::AccountService;
pub use account_store::AccountStore;
pub use error::{Result, ServiceError};
pub use identity_provider::{IdentityProvider, LocalIdentityProvider};
pub use leaderboard::Leaderboard;
pub use metrics::Metrics;
pub use service_config::ServiceConfig;
pub use session::Session;

use crate::{
    AppState, get_account, health, record_outcome, register, sign_in, top_players,
    update_display_name,
};

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Accounts and sessions
        .route("/api/v1/accounts", post(register))
        .route("/api/v1/sessions", post(sign_in))
        // Signed-in player
        .route("/api/v1/me", get(get_account))
        .route("/api/v1/me/display-name", put(update_display_name))
        .route("/api/v1/me/outcomes", post(record_outcome))
        // Public leaderboard
        .route("/api/v1/leaderboard", get(top_players))
        // Health and metrics
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/metrics", get(health::metrics))
        .with_state(state)
        // Game clients may be served from any origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

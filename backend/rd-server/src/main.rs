use rd_server::error::ServerError;
use rd_server::{AppState, build_router, logger};

use std::error::Error;
use std::time::Duration;

use log::{error, info, warn};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = rd_config::Config::load()?;
    config.validate()?;
    let jwt_secret = config.auth.require_jwt_secret()?.to_string();

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting rd-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Database (migrations run on connect)
    let database_path = config.database_path()?;
    let pool = rd_db::connect(&database_path, config.database.max_connections)
        .await
        .map_err(ServerError::from)?;
    info!("Database ready");

    let metrics = match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!("Prometheus recorder not installed, /metrics disabled: {}", e);
            None
        }
    };

    let state = AppState::new(pool.clone(), &config, &jwt_secret, metrics);

    // Forget sign-in throttling state for emails that have gone quiet
    let limiter = state.login_limiter.clone();
    let sweep_every = Duration::from_secs(config.rate_limit.window_secs.max(1));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(sweep_every);
        loop {
            ticker.tick().await;
            limiter.retain_recent();
        }
    });

    let app = build_router(state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Actual bound address matters when port is 0
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => {
                    error!("Failed to listen for SIGINT: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

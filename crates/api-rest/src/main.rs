//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the mock DoHAC REST API on its own, without the static front-end.
//!
//! ## Intended use
//! Useful for development and for pointing API clients at the mock. The workspace's main
//! `dohac-run` binary serves the same API plus the single-page app.

use api_rest::{core_config_from_env, router, shutdown_signal, AppState};
use dohac_core::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the DoHAC mock REST API server
///
/// Listens on `0.0.0.0:$PORT` (default 8080) until SIGINT or SIGTERM.
///
/// # Environment Variables
/// - `PORT`: listening port (default: 8080)
/// - `DOHAC_BASE_URL`: base of bundle links
/// - `DOHAC_REGISTRATION_URL`: base of `registration_client_uri`
/// - `DOHAC_ATTENDANCE_PATCH_POLICY`: `record`, `submission` or `acknowledge`
///
/// # Errors
/// Returns an error if:
/// - the logging configuration or environment is invalid,
/// - the address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port = match std::env::var("PORT") {
        Ok(port) => port.parse::<u16>()?,
        Err(_) => 8080,
    };
    let addr = format!("0.0.0.0:{port}");

    let cfg = core_config_from_env()?;
    tracing::info!(
        base_url = cfg.base_url(),
        patch_policy = %cfg.patch_policy(),
        "-- Starting DoHAC mock REST API on {}",
        addr
    );

    let app = router(AppState::new(cfg, Store::seeded()));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

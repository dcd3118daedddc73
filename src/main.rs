use api_rest::{AppState, core_config_from_env, router, shutdown_signal};
use clap::Parser;
use dohac_core::Store;
use std::net::SocketAddr;
use std::path::PathBuf;
use tower_http::services::{ServeDir, ServeFile};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Mock DoHAC aged-care reporting API, with the front-end served alongside it.
#[derive(Parser, Debug)]
#[command(name = "dohac-run", version, about)]
struct Args {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// Directory holding the built single-page app
    #[arg(long, env = "SPA_DIR", default_value = "spa")]
    spa_dir: PathBuf,
}

/// Main entry point for the DoHAC mock
///
/// Serves the REST API under `/api` and the single-page app for every other path. Unknown
/// non-API paths fall back to the app's `index.html` so client-side routes resolve.
///
/// # Environment Variables
/// - `PORT`: listening port (default: 8080)
/// - `SPA_DIR`: single-page app directory (default: `spa`)
/// - `DOHAC_BASE_URL`, `DOHAC_REGISTRATION_URL`, `DOHAC_ATTENDANCE_PATCH_POLICY`: see `api-rest`
/// - `RUST_LOG`: log filter
///
/// # Errors
/// Returns an error if:
/// - the configuration is invalid,
/// - the address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dohac_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("dohac_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let cfg = core_config_from_env()?;
    tracing::info!(
        base_url = cfg.base_url(),
        patch_policy = %cfg.patch_policy(),
        "resolved configuration"
    );

    if !args.spa_dir.is_dir() {
        tracing::warn!(
            spa_dir = %args.spa_dir.display(),
            "single-page app directory not found; only the API will answer"
        );
    }
    let spa = ServeDir::new(&args.spa_dir)
        .not_found_service(ServeFile::new(args.spa_dir.join("index.html")));

    let app = router(AppState::new(cfg, Store::seeded())).fallback_service(spa);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    tracing::info!("-- Starting DoHAC mock on {}", addr);
    tracing::info!("-- Swagger UI at http://{}/api/swagger-ui", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

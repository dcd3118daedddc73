//! # API REST
//!
//! REST API implementation for the DoHAC mock APIs.
//!
//! Handles:
//! - HTTP endpoints with axum, all under `/api`
//! - The bearer-token gate in front of the resource routes
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON and form bodies, multipart uploads, CORS)
//!
//! Uses `dohac-core` for the data and `api-shared` for common types.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use openapi::ApiDoc;
pub use state::{core_config_from_env, AppState};

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};
use handlers::{auth, health, nurses, provider, quality};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Largest accepted request body, CSV uploads included.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Routes under `/api`, without the outer layers.
fn api_routes(state: AppState) -> Router {
    let public = Router::new()
        .route("/health", get(health::health))
        .route("/oauth2/access-tokens", post(auth::create_access_token))
        .route("/oauth2/registration", post(auth::register_client))
        .route(
            "/oauth2/registration/:id",
            patch(auth::update_client).delete(auth::delete_client),
        );

    let protected = Router::new()
        .route("/Provider", get(provider::list_providers))
        .route("/Provider/:id", get(provider::get_provider))
        .route("/HealthcareService", get(provider::list_services))
        .route("/HealthcareService/:id", get(provider::get_service))
        .route("/Questionnaire", get(quality::list_questionnaires))
        .route("/Questionnaire/:id", get(quality::get_questionnaire))
        .route(
            "/QuestionnaireResponse",
            get(quality::list_responses).post(quality::create_response),
        )
        .route("/QuestionnaireResponse/:id", get(quality::get_response))
        .route("/RegisteredNurseAttendance", get(nurses::list_attendances))
        .route(
            "/RegisteredNurseAttendance/:id",
            get(nurses::get_attendance).patch(nurses::update_attendance),
        )
        .route_layer(axum::middleware::from_fn(middleware::require_bearer));

    public
        .merge(protected)
        .fallback(handlers::not_found)
        .with_state(state)
}

/// The complete API: `/api` routes, Swagger UI at `/api/swagger-ui`, and the CORS, trace and
/// body-limit layers.
///
/// Binaries add their own fallback (such as static files) for paths outside `/api`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes(state))
        .merge(
            SwaggerUi::new("/api/swagger-ui").url("/api/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(middleware::cors())
        .layer(middleware::trace())
}

/// Completes when the process receives SIGINT (Ctrl+C) or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received, draining in-flight requests");
}

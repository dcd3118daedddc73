//! Request gating and the layers wrapped around the whole API.

use crate::error::ApiError;
use api_shared::{validate_bearer, AuthError};
use axum::{
    extract::Request,
    http::{header, HeaderName, Method},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Duration;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Rejects requests without an `Authorization: Bearer mock_...` header.
///
/// Applied with `route_layer` to the protected routes only, so unknown paths still 404.
pub async fn require_bearer(req: Request, next: Next) -> Response {
    // A header that is not visible ASCII cannot be `Bearer mock_...`.
    let checked = match req.headers().get(header::AUTHORIZATION) {
        None => validate_bearer(None).map(|_| ()),
        Some(value) => value
            .to_str()
            .map_err(|_| AuthError::NotBearer)
            .and_then(|v| validate_bearer(Some(v)).map(|_| ())),
    };

    match checked {
        Ok(_) => next.run(req).await,
        Err(err) => {
            tracing::debug!(path = %req.uri().path(), error = %err, "bearer check failed");
            ApiError::from(err).into_response()
        }
    }
}

/// CORS for browser clients: any origin, with credentials.
///
/// Credentials rule out a literal `*` origin, so the request origin is mirrored instead.
pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-csrf-token"),
            HeaderName::from_static("transaction_id"),
        ])
        .expose_headers([header::LINK])
        .allow_credentials(true)
        .max_age(Duration::from_secs(300))
}

/// Request spans and response logging.
pub fn trace() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
}

//! HTTP handlers, one module per resource area.

pub mod auth;
pub mod health;
pub mod nurses;
pub mod provider;
pub mod quality;

use crate::error::ApiError;

/// Fallback for unknown paths under `/api`.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not found".into())
}

//! # API Shared
//!
//! Shared definitions for the mock reporting API.
//!
//! Contains:
//! - OAuth2 token and client registration wire types (`oauth` module)
//! - Bearer token validation (`auth` module)
//! - The error and acknowledgement bodies
//! - `HealthService`
//!
//! Used by `dohac-core` and `api-rest`.

pub mod auth;
pub mod health;
pub mod oauth;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use auth::{validate_bearer, AuthError};
pub use health::{HealthRes, HealthService};
pub use oauth::{
    ClientRegistrationRequest, ClientRegistrationResponse, ClientUpdateRequest, TokenRequest,
    TokenResponse,
};

/// Flat error body: `{"error": "<message>"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

impl ErrorRes {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Plain acknowledgement body: `{"message": "<text>"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageRes {
    pub message: String,
}

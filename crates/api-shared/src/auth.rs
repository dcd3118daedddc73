//! Bearer token checks shared by the REST server and its tests.
//!
//! Tokens are never verified cryptographically. Any token issued by the mock token endpoint
//! carries the [`TOKEN_PREFIX`], and that prefix is the only thing checked.

/// Prefix every mock access token starts with.
pub const TOKEN_PREFIX: &str = "mock_";

/// The only accepted authorisation scheme.
pub const BEARER_SCHEME: &str = "Bearer";

/// Reasons a request is rejected by the bearer gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Authorization header is required")]
    MissingHeader,
    #[error("Authorization header must be Bearer token")]
    NotBearer,
    #[error("Invalid token")]
    InvalidToken,
}

/// Validates the value of an `Authorization` header.
///
/// The header must be exactly `Bearer <token>` (one space, case-sensitive scheme) and the token
/// must start with [`TOKEN_PREFIX`]. An empty header counts as missing.
///
/// Returns the token on success.
pub fn validate_bearer(header: Option<&str>) -> Result<&str, AuthError> {
    let header = match header {
        Some(h) if !h.is_empty() => h,
        _ => return Err(AuthError::MissingHeader),
    };

    let parts: Vec<&str> = header.split(' ').collect();
    if parts.len() != 2 || parts[0] != BEARER_SCHEME {
        return Err(AuthError::NotBearer);
    }

    let token = parts[1];
    if !token.starts_with(TOKEN_PREFIX) {
        return Err(AuthError::InvalidToken);
    }

    Ok(token)
}

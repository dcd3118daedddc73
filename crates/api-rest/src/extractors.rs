//! Request body extractors with the API's own rejection messages.
//!
//! Both extractors read the whole body first, log it at debug level together with the request
//! headers, and only then decode it. A body that cannot be read is a server error
//! (`Could not read request body`); one that cannot be decoded is a bad request.

use crate::error::ApiError;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON request body. Decoding failures are rejected with `Invalid request body`.
pub struct JsonBody<T>(pub T);

/// `application/x-www-form-urlencoded` request body, merged with the URL query string.
///
/// A key present in both takes the body's value; repeated keys keep their first value. Decoding
/// failures are rejected with `Invalid form data`.
pub struct FormBody<T>(pub T);

async fn read_body<S>(req: Request, state: &S) -> Result<Bytes, ApiError>
where
    S: Send + Sync,
{
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    tracing::debug!(%method, %path, headers = ?req.headers(), "request headers");

    let bytes = Bytes::from_request(req, state).await.map_err(|err| {
        tracing::warn!(%method, %path, error = %err, "failed to read request body");
        ApiError::Internal("Could not read request body".into())
    })?;

    tracing::debug!(%method, %path, body = %String::from_utf8_lossy(&bytes), "raw request body");
    Ok(bytes)
}

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = read_body(req, state).await?;
        serde_json::from_slice(&bytes).map(JsonBody).map_err(|err| {
            tracing::debug!(error = %err, "failed to decode JSON body");
            ApiError::BadRequest("Invalid request body".into())
        })
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for FormBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = req.uri().query().unwrap_or_default().to_owned();
        let bytes = read_body(req, state).await?;

        let invalid = |err: serde_urlencoded::de::Error| {
            tracing::debug!(error = %err, "failed to decode form body");
            ApiError::BadRequest("Invalid form data".into())
        };
        let body: Vec<(String, String)> = serde_urlencoded::from_bytes(&bytes).map_err(invalid)?;
        let query: Vec<(String, String)> = serde_urlencoded::from_str(&query).map_err(invalid)?;

        let mut merged: Vec<(String, String)> = Vec::with_capacity(body.len() + query.len());
        for (key, value) in body.into_iter().chain(query) {
            if !merged.iter().any(|(k, _)| *k == key) {
                merged.push((key, value));
            }
        }

        let encoded = serde_urlencoded::to_string(&merged).map_err(|err| {
            tracing::warn!(error = %err, "failed to re-encode form fields");
            ApiError::BadRequest("Invalid form data".into())
        })?;
        serde_urlencoded::from_str(&encoded)
            .map(FormBody)
            .map_err(invalid)
    }
}

//! OAuth2 token and client registration endpoints. None of them require a bearer token.

use crate::error::ApiResult;
use crate::extractors::{FormBody, JsonBody};
use crate::state::AppState;
use api_shared::{
    ClientRegistrationRequest, ClientRegistrationResponse, ClientUpdateRequest, ErrorRes,
    TokenRequest, TokenResponse,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;

#[utoipa::path(
    post,
    path = "/api/oauth2/access-tokens",
    tag = "oauth2",
    request_body(content = TokenRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Access token issued", body = TokenResponse),
        (status = 400, description = "grant_type or client_id missing", body = ErrorRes),
        (status = 500, description = "Request body could not be read", body = ErrorRes)
    )
)]
/// Issue a mock access token.
///
/// Credentials are not checked; the token is `mock_<client_id>_<YYYYMMDDhhmmss>`.
#[axum::debug_handler]
pub async fn create_access_token(
    State(state): State<AppState>,
    FormBody(req): FormBody<TokenRequest>,
) -> ApiResult<(StatusCode, Json<TokenResponse>)> {
    tracing::debug!(?req, "token request");
    let token = state.auth.issue_token(&req, Utc::now())?;
    tracing::info!(client_id = %req.client_id, "issued access token");
    Ok((StatusCode::CREATED, Json(token)))
}

#[utoipa::path(
    post,
    path = "/api/oauth2/registration",
    tag = "oauth2",
    request_body = ClientRegistrationRequest,
    responses(
        (status = 200, description = "Client registered", body = ClientRegistrationResponse),
        (status = 400, description = "Malformed body or required fields missing", body = ErrorRes),
        (status = 500, description = "Request body could not be read", body = ErrorRes)
    )
)]
/// Register an OAuth2 client.
#[axum::debug_handler]
pub async fn register_client(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ClientRegistrationRequest>,
) -> ApiResult<Json<ClientRegistrationResponse>> {
    tracing::debug!(?req, "registration request");
    let resp = state.auth.register_client(req, Utc::now())?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/oauth2/registration/{id}",
    tag = "oauth2",
    params(("id" = String, Path, description = "Client id")),
    request_body = ClientUpdateRequest,
    responses(
        (status = 200, description = "Client updated", body = ClientRegistrationResponse),
        (status = 400, description = "Malformed body or empty id", body = ErrorRes),
        (status = 500, description = "Request body could not be read", body = ErrorRes)
    )
)]
/// Update a registered client. The update is echoed back; no client state is kept.
#[axum::debug_handler]
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<ClientUpdateRequest>,
) -> ApiResult<Json<ClientRegistrationResponse>> {
    tracing::debug!(client_id = %id, ?req, "client update request");
    let resp = state.auth.update_client(&id, req)?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/oauth2/registration/{id}",
    tag = "oauth2",
    params(("id" = String, Path, description = "Client id")),
    responses(
        (status = 204, description = "Client deleted"),
        (status = 400, description = "Empty id", body = ErrorRes)
    )
)]
/// Delete a registered client. Nothing is removed.
#[axum::debug_handler]
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.auth.delete_client(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

//! Provider directory endpoints.

use crate::error::ApiResult;
use crate::state::AppState;
use api_shared::ErrorRes;
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use fhir::{HealthcareService, Provider};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ServiceQuery {
    /// Only services provided by this provider id.
    pub organization: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/Provider",
    tag = "provider",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All providers", body = [Provider]),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn list_providers(State(state): State<AppState>) -> Json<Vec<Provider>> {
    Json(state.providers.list_providers())
}

#[utoipa::path(
    get,
    path = "/api/Provider/{id}",
    tag = "provider",
    security(("bearer" = [])),
    params(("id" = String, Path, description = "Provider id")),
    responses(
        (status = 200, description = "The provider", body = Provider),
        (status = 404, description = "Provider not found", body = ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn get_provider(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Provider>> {
    Ok(Json(state.providers.provider(&id)?))
}

#[utoipa::path(
    get,
    path = "/api/HealthcareService",
    tag = "provider",
    security(("bearer" = [])),
    params(ServiceQuery),
    responses(
        (status = 200, description = "Healthcare services, optionally filtered by provider", body = [HealthcareService])
    )
)]
/// List healthcare services. An unknown `organization` yields an empty list.
#[axum::debug_handler]
pub async fn list_services(
    State(state): State<AppState>,
    Query(query): Query<ServiceQuery>,
) -> Json<Vec<HealthcareService>> {
    Json(state.providers.list_services(query.organization.as_deref()))
}

#[utoipa::path(
    get,
    path = "/api/HealthcareService/{id}",
    tag = "provider",
    security(("bearer" = [])),
    params(("id" = String, Path, description = "Healthcare service id")),
    responses(
        (status = 200, description = "The healthcare service", body = HealthcareService),
        (status = 404, description = "Healthcare Service not found", body = ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<HealthcareService>> {
    Ok(Json(state.providers.service(&id)?))
}

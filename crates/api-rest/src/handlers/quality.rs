//! Quality indicator endpoints.

use crate::error::ApiResult;
use crate::extractors::JsonBody;
use crate::state::AppState;
use api_shared::ErrorRes;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use fhir::{Questionnaire, QuestionnaireResponse};

#[utoipa::path(
    get,
    path = "/api/Questionnaire",
    tag = "quality",
    security(("bearer" = [])),
    responses((status = 200, description = "All questionnaires", body = [Questionnaire]))
)]
#[axum::debug_handler]
pub async fn list_questionnaires(State(state): State<AppState>) -> Json<Vec<Questionnaire>> {
    Json(state.quality.list_questionnaires())
}

#[utoipa::path(
    get,
    path = "/api/Questionnaire/{id}",
    tag = "quality",
    security(("bearer" = [])),
    params(("id" = String, Path, description = "Questionnaire id")),
    responses(
        (status = 200, description = "The questionnaire", body = Questionnaire),
        (status = 404, description = "Questionnaire not found", body = ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn get_questionnaire(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Questionnaire>> {
    Ok(Json(state.quality.questionnaire(&id)?))
}

#[utoipa::path(
    get,
    path = "/api/QuestionnaireResponse",
    tag = "quality",
    security(("bearer" = [])),
    responses((status = 200, description = "All questionnaire responses", body = [QuestionnaireResponse]))
)]
#[axum::debug_handler]
pub async fn list_responses(State(state): State<AppState>) -> Json<Vec<QuestionnaireResponse>> {
    Json(state.quality.list_responses())
}

#[utoipa::path(
    get,
    path = "/api/QuestionnaireResponse/{id}",
    tag = "quality",
    security(("bearer" = [])),
    params(("id" = String, Path, description = "Questionnaire response id")),
    responses(
        (status = 200, description = "The questionnaire response", body = QuestionnaireResponse),
        (status = 404, description = "Questionnaire response not found", body = ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn get_response(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<QuestionnaireResponse>> {
    Ok(Json(state.quality.response(&id)?))
}

#[utoipa::path(
    post,
    path = "/api/QuestionnaireResponse",
    tag = "quality",
    security(("bearer" = [])),
    request_body = QuestionnaireResponse,
    responses(
        (status = 201, description = "Response stored", body = QuestionnaireResponse),
        (status = 400, description = "Malformed body, missing questionnaire/subject or duplicate id", body = ErrorRes)
    )
)]
/// Submit a questionnaire response.
///
/// `id`, `status` and `authored` are filled in when absent.
#[axum::debug_handler]
pub async fn create_response(
    State(state): State<AppState>,
    JsonBody(response): JsonBody<QuestionnaireResponse>,
) -> ApiResult<(StatusCode, Json<QuestionnaireResponse>)> {
    let stored = state.quality.create_response(response, Utc::now())?;
    Ok((StatusCode::CREATED, Json(stored)))
}

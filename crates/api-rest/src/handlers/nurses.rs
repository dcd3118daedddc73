//! Registered nurse attendance endpoints.

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use api_shared::{ErrorRes, MessageRes};
use axum::{
    body::Bytes,
    extract::{FromRequest, Multipart, Path, Query, Request, State},
    http::header,
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use dohac_core::repositories::attendance::is_multipart;
use dohac_core::{
    AttendancePatch, AttendancePatchOutcome, AttendanceSearch, AttendanceSearchParams, CsvUpload,
};
use fhir::{Bundle, RegisteredNurseAttendance};
use serde::Deserialize;
use utoipa::IntoParams;

/// Form field carrying the uploaded attendance CSV.
const CSV_FIELD: &str = "csv";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AttendanceQuery {
    /// Only attendances recorded against this healthcare service id.
    pub service: Option<String>,
    /// `true` returns the daily compliance summaries instead of a bundle.
    pub summary: Option<String>,
    /// Page size. Accepted but not applied.
    #[serde(rename = "_count")]
    pub count: Option<String>,
    /// Page number. Accepted but not applied.
    pub page: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/RegisteredNurseAttendance",
    tag = "nurses",
    security(("bearer" = [])),
    params(AttendanceQuery),
    responses(
        (status = 200, description = "A searchset bundle of attendances; with summary=true, an array of AttendanceSummary instead", body = Bundle)
    )
)]
#[axum::debug_handler]
pub async fn list_attendances(
    State(state): State<AppState>,
    Query(query): Query<AttendanceQuery>,
) -> Response {
    let params = AttendanceSearchParams::from_query(
        query.service,
        query.summary.as_deref(),
        query.count.as_deref(),
        query.page.as_deref(),
    );

    match state.attendance.search(&params) {
        AttendanceSearch::Summary(summaries) => Json(summaries).into_response(),
        AttendanceSearch::Bundle(bundle) => Json(bundle).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/RegisteredNurseAttendance/{id}",
    tag = "nurses",
    security(("bearer" = [])),
    params(("id" = String, Path, description = "Attendance id")),
    responses(
        (status = 200, description = "The attendance record", body = RegisteredNurseAttendance),
        (status = 404, description = "Registered nurse attendance not found", body = ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn get_attendance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<RegisteredNurseAttendance>> {
    Ok(Json(state.attendance.attendance(&id)?))
}

#[utoipa::path(
    patch,
    path = "/api/RegisteredNurseAttendance/{id}",
    tag = "nurses",
    security(("bearer" = [])),
    params(("id" = String, Path, description = "Attendance or submission id")),
    request_body(
        content = fhir::NotePatch,
        content_type = "application/json",
        description = "A JSON note list (or submission payload), or a multipart form with a `csv` file part"
    ),
    responses(
        (status = 200, description = "Updated or synthesized attendance record; under the acknowledge policy a MessageRes", body = RegisteredNurseAttendance),
        (status = 400, description = "Malformed JSON or multipart body", body = ErrorRes),
        (status = 404, description = "Registered nurse attendance not found", body = ErrorRes),
        (status = 415, description = "Content type not accepted by the active policy", body = ErrorRes)
    )
)]
/// Update an attendance record or acknowledge a submission, according to the configured
/// patch policy.
#[axum::debug_handler]
pub async fn update_attendance(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Request,
) -> ApiResult<Response> {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();

    // Reject before reading a possibly large upload.
    state.attendance.preflight(&id, &content_type)?;

    let patch = if is_multipart(&content_type) {
        AttendancePatch::Csv(read_csv_upload(request).await?)
    } else {
        let body = Bytes::from_request(request, &())
            .await
            .map_err(|_| ApiError::Internal("Could not read request body".into()))?;
        AttendancePatch::Json(body.to_vec())
    };

    let response = match state.attendance.patch(&id, patch, Utc::now())? {
        AttendancePatchOutcome::Record(record) => Json(record).into_response(),
        AttendancePatchOutcome::Acknowledged(message) => {
            Json(MessageRes { message }).into_response()
        }
    };
    Ok(response)
}

/// Pulls the `csv` file part out of a multipart body.
async fn read_csv_upload(request: Request) -> ApiResult<CsvUpload> {
    let mut multipart = Multipart::from_request(request, &())
        .await
        .map_err(|err| ApiError::BadRequest(format!("Could not parse multipart form: {err}")))?;

    loop {
        let field = multipart
            .next_field()
            .await
            .map_err(|err| ApiError::BadRequest(format!("Could not parse multipart form: {err}")))?;
        let Some(field) = field else {
            return Err(ApiError::BadRequest(
                "Could not retrieve CSV file: no such file".into(),
            ));
        };

        if field.name() != Some(CSV_FIELD) {
            continue;
        }
        let Some(file_name) = field.file_name().map(str::to_owned) else {
            return Err(ApiError::BadRequest(
                "Could not retrieve CSV file: no such file".into(),
            ));
        };

        let data = field
            .bytes()
            .await
            .map_err(|err| ApiError::BadRequest(format!("Could not retrieve CSV file: {err}")))?;
        return Ok(CsvUpload {
            file_name,
            size: data.len(),
        });
    }
}

//! Registered nurse attendance search and updates.
//!
//! Updates follow one [`AttendancePatchPolicy`], fixed at startup:
//!
//! | policy        | JSON body                     | CSV upload (`multipart/form-data`)         |
//! |---------------|-------------------------------|--------------------------------------------|
//! | `record`      | replaces the record's notes   | appends a note; `Sub-` ids are acknowledged |
//! | `submission`  | 415                           | acknowledges a new `Sub-` submission        |
//! | `acknowledge` | decoded and acknowledged      | 415                                         |

use crate::config::{AttendancePatchPolicy, CoreConfig};
use crate::constants::{
    ATTENDANCE_BUNDLE_ID, ATTENDANCE_PATH, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, SUBMISSION_ID_PREFIX,
    SUBMISSION_SERVICE_ID,
};
use crate::store::Store;
use crate::{CoreError, CoreResult};
use chrono::{DateTime, SecondsFormat, Utc};
use fhir::{
    Annotation, AttendanceSubmissionPatch, AttendanceSummary, Bundle, BundleEntry, NotePatch,
    Reference, RegisteredNurseAttendance, ResourceType,
};
use std::sync::Arc;

const JSON_CONTENT_TYPE: &str = "application/json";
const MULTIPART_CONTENT_TYPE: &str = "multipart/form-data";

/// True when a `Content-Type` header value denotes a JSON body.
pub fn is_json(content_type: &str) -> bool {
    content_type.contains(JSON_CONTENT_TYPE)
}

/// True when a `Content-Type` header value denotes a multipart form.
pub fn is_multipart(content_type: &str) -> bool {
    content_type.contains(MULTIPART_CONTENT_TYPE)
}

/// Page size and number requested by a search.
///
/// Accepted and logged, but never applied to results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paging {
    pub count: u32,
    pub page: u32,
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            count: DEFAULT_PAGE_SIZE,
            page: DEFAULT_PAGE,
        }
    }
}

impl Paging {
    /// Parses raw `_count` / `page` values. Anything that is not a positive integer falls back
    /// to the default for that member.
    pub fn parse(count: Option<&str>, page: Option<&str>) -> Self {
        fn positive(value: Option<&str>) -> Option<u32> {
            value
                .and_then(|v| v.parse::<i64>().ok())
                .filter(|v| *v > 0)
                .and_then(|v| u32::try_from(v).ok())
        }

        Self {
            count: positive(count).unwrap_or(DEFAULT_PAGE_SIZE),
            page: positive(page).unwrap_or(DEFAULT_PAGE),
        }
    }
}

/// Parsed query of `GET /RegisteredNurseAttendance`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttendanceSearchParams {
    pub service: Option<String>,
    pub summary: bool,
    pub paging: Paging,
}

impl AttendanceSearchParams {
    /// Builds search parameters from raw query values. Only the exact value `true` selects the
    /// summary view; an empty `service` means no filter.
    pub fn from_query(
        service: Option<String>,
        summary: Option<&str>,
        count: Option<&str>,
        page: Option<&str>,
    ) -> Self {
        Self {
            service: service.filter(|s| !s.is_empty()),
            summary: summary == Some("true"),
            paging: Paging::parse(count, page),
        }
    }
}

/// Result of an attendance search.
#[derive(Clone, Debug, PartialEq)]
pub enum AttendanceSearch {
    Summary(Vec<AttendanceSummary>),
    Bundle(Bundle),
}

/// A CSV file received in the `csv` part of a multipart upload. Only its metadata is used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsvUpload {
    pub file_name: String,
    pub size: usize,
}

/// Body of an attendance update, already split by content type.
#[derive(Clone, Debug, PartialEq)]
pub enum AttendancePatch {
    /// Raw `application/json` body, decoded according to the active policy.
    Json(Vec<u8>),
    Csv(CsvUpload),
}

impl AttendancePatch {
    fn content_type(&self) -> &'static str {
        match self {
            AttendancePatch::Json(_) => JSON_CONTENT_TYPE,
            AttendancePatch::Csv(_) => MULTIPART_CONTENT_TYPE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AttendancePatchOutcome {
    /// The updated (or synthesized) attendance record.
    Record(RegisteredNurseAttendance),
    /// A message acknowledging the submission; nothing was stored.
    Acknowledged(String),
}

/// Search and update of registered nurse attendance.
#[derive(Clone, Debug)]
pub struct AttendanceService {
    cfg: Arc<CoreConfig>,
    store: Arc<Store>,
}

impl AttendanceService {
    pub fn new(cfg: Arc<CoreConfig>, store: Arc<Store>) -> Self {
        Self { cfg, store }
    }

    /// Runs an attendance search.
    ///
    /// The summary view ignores every other parameter. Otherwise the records, optionally
    /// filtered by service, are wrapped in a `searchset` bundle whose `total` is the number of
    /// matches.
    pub fn search(&self, params: &AttendanceSearchParams) -> AttendanceSearch {
        tracing::debug!(
            count = params.paging.count,
            page = params.paging.page,
            "attendance paging requested but not applied"
        );

        if params.summary {
            return AttendanceSearch::Summary(self.store.attendance_summaries.list());
        }

        let records = match params.service.as_deref() {
            Some(service) => self
                .store
                .attendances
                .filter(&|a| a.is_for_service(service)),
            None => self.store.attendances.list(),
        };

        let self_url = format!("{}/{ATTENDANCE_PATH}", self.cfg.base_url());
        let entry = records
            .into_iter()
            .map(|record| BundleEntry::new(format!("{self_url}/{}", record.id), record))
            .collect();

        AttendanceSearch::Bundle(Bundle::searchset(ATTENDANCE_BUNDLE_ID, self_url, entry))
    }

    pub fn attendance(&self, id: &str) -> CoreResult<RegisteredNurseAttendance> {
        self.store.attendances.get(id).ok_or_else(not_found)
    }

    /// Checks whether an update with `content_type` can be applied to `id`, before the body is
    /// read.
    ///
    /// # Errors
    ///
    /// - `CoreError::NotFound` when the policy needs an existing record (or, for submissions, a
    ///   new `Sub-` id) and `id` does not qualify
    /// - `CoreError::UnsupportedMediaType` when the policy does not accept `content_type`
    pub fn preflight(&self, id: &str, content_type: &str) -> CoreResult<()> {
        let unsupported = || CoreError::UnsupportedMediaType(content_type.to_owned());

        match self.cfg.patch_policy() {
            AttendancePatchPolicy::Record => {
                if is_multipart(content_type) && is_submission_id(id) {
                    return Ok(());
                }
                if !self.store.attendances.contains(id) {
                    return Err(not_found());
                }
                if is_json(content_type) || is_multipart(content_type) {
                    Ok(())
                } else {
                    Err(unsupported())
                }
            }
            AttendancePatchPolicy::Submission => {
                if !is_multipart(content_type) {
                    return Err(unsupported());
                }
                if !is_submission_id(id) || self.store.attendances.contains(id) {
                    return Err(not_found());
                }
                Ok(())
            }
            AttendancePatchPolicy::Acknowledge => {
                if is_json(content_type) {
                    Ok(())
                } else {
                    Err(unsupported())
                }
            }
        }
    }

    /// Applies an update to attendance `id` under the configured policy.
    ///
    /// # Errors
    ///
    /// Everything [`preflight`](Self::preflight) reports, plus `CoreError::InvalidInput` for a
    /// JSON body that does not decode.
    pub fn patch(
        &self,
        id: &str,
        patch: AttendancePatch,
        now: DateTime<Utc>,
    ) -> CoreResult<AttendancePatchOutcome> {
        self.preflight(id, patch.content_type())?;
        let policy = self.cfg.patch_policy();

        match (policy, patch) {
            (AttendancePatchPolicy::Acknowledge, AttendancePatch::Json(body)) => {
                let submission: AttendanceSubmissionPatch = decode_json(&body)?;
                tracing::info!(
                    id,
                    days = submission.attendance_days.len(),
                    status = submission.submission_status.as_deref().unwrap_or(""),
                    "acknowledged attendance submission"
                );
                Ok(AttendancePatchOutcome::Acknowledged(format!(
                    "Registered nurse attendance {id} updated"
                )))
            }
            (AttendancePatchPolicy::Record, AttendancePatch::Json(body)) => {
                let NotePatch { note } = decode_json(&body)?;
                let updated = self
                    .store
                    .attendances
                    .update(id, &mut |record| record.note = note.clone())
                    .ok_or_else(not_found)?;
                tracing::info!(id, "replaced attendance notes from JSON");
                Ok(AttendancePatchOutcome::Record(updated))
            }
            (AttendancePatchPolicy::Record, AttendancePatch::Csv(upload))
                if !is_submission_id(id) =>
            {
                let text = format!(
                    "CSV file '{}' processed at {}.",
                    upload.file_name,
                    rfc3339(now)
                );
                tracing::info!(id, file = %upload.file_name, size = upload.size, "received attendance CSV");
                let updated = self
                    .store
                    .attendances
                    .update(id, &mut |record| {
                        record.note.push(Annotation { text: text.clone() })
                    })
                    .ok_or_else(not_found)?;
                Ok(AttendancePatchOutcome::Record(updated))
            }
            (_, AttendancePatch::Csv(upload)) => Ok(AttendancePatchOutcome::Record(
                self.submission_record(id, &upload, now),
            )),
            (_, AttendancePatch::Json(_)) => {
                Err(CoreError::UnsupportedMediaType(JSON_CONTENT_TYPE.into()))
            }
        }
    }

    /// Builds the record acknowledging a CSV upload for submission `id`. Nothing is stored.
    fn submission_record(
        &self,
        id: &str,
        upload: &CsvUpload,
        now: DateTime<Utc>,
    ) -> RegisteredNurseAttendance {
        tracing::info!(id, file = %upload.file_name, size = upload.size, "received CSV for submission");

        let service_name = self
            .store
            .healthcare_services
            .get(SUBMISSION_SERVICE_ID)
            .map(|s| s.name)
            .unwrap_or_default();

        RegisteredNurseAttendance {
            resource_type: ResourceType::Encounter,
            id: id.to_owned(),
            identifier: Vec::new(),
            status: "completed".to_owned(),
            subject: Reference::to(
                ResourceType::HealthcareService,
                SUBMISSION_SERVICE_ID,
                &service_name,
            ),
            period: None,
            performer: Vec::new(),
            reason_code: Vec::new(),
            note: vec![Annotation {
                text: format!(
                    "CSV file '{}' processed for submission {id} at {}.",
                    upload.file_name,
                    rfc3339(now)
                ),
            }],
        }
    }
}

fn not_found() -> CoreError {
    CoreError::NotFound("Registered nurse attendance not found".into())
}

fn is_submission_id(id: &str) -> bool {
    id.starts_with(SUBMISSION_ID_PREFIX)
}

fn rfc3339(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn decode_json<T: serde::de::DeserializeOwned>(body: &[u8]) -> CoreResult<T> {
    serde_json::from_slice(body)
        .map_err(|err| CoreError::InvalidInput(format!("Invalid JSON payload: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_REGISTRATION_URL;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    fn service(policy: AttendancePatchPolicy) -> AttendanceService {
        let cfg = CoreConfig::new(
            "https://api.health.gov.au".into(),
            DEFAULT_REGISTRATION_URL.into(),
            policy,
        )
        .expect("valid config");
        AttendanceService::new(Arc::new(cfg), Arc::new(Store::seeded()))
    }

    fn csv(name: &str) -> AttendancePatch {
        AttendancePatch::Csv(CsvUpload {
            file_name: name.to_owned(),
            size: 42,
        })
    }

    fn bundle(search: AttendanceSearch) -> Bundle {
        match search {
            AttendanceSearch::Bundle(bundle) => bundle,
            other => panic!("expected a bundle, got {other:?}"),
        }
    }

    #[test]
    fn paging_falls_back_on_invalid_values() {
        assert_eq!(Paging::parse(None, None), Paging::default());
        assert_eq!(
            Paging::parse(Some("abc"), Some("-3")),
            Paging { count: 10, page: 1 }
        );
        assert_eq!(
            Paging::parse(Some("0"), Some("99999999999")),
            Paging { count: 10, page: 1 }
        );
        assert_eq!(
            Paging::parse(Some("25"), Some("2")),
            Paging { count: 25, page: 2 }
        );
    }

    #[test]
    fn summary_ignores_other_parameters() {
        let svc = service(AttendancePatchPolicy::Record);
        for (service_id, count, page) in [
            (None, None, None),
            (Some("SVC-24680".to_owned()), Some("abc"), Some("-1")),
            (Some("nope".to_owned()), Some("5"), Some("9")),
        ] {
            let params = AttendanceSearchParams::from_query(service_id, Some("true"), count, page);
            match svc.search(&params) {
                AttendanceSearch::Summary(summaries) => {
                    let ids: Vec<&str> = summaries.iter().map(|s| s.id.as_str()).collect();
                    assert_eq!(ids, vec!["SUM-12345", "SUM-23456"]);
                }
                other => panic!("expected summaries, got {other:?}"),
            }
        }
    }

    #[test]
    fn summary_flag_must_be_exactly_true() {
        let params = AttendanceSearchParams::from_query(None, Some("TRUE"), None, None);
        assert!(!params.summary);
    }

    #[test]
    fn bundle_filters_by_service_and_ignores_paging() {
        let svc = service(AttendancePatchPolicy::Record);

        let all = bundle(svc.search(&AttendanceSearchParams::from_query(
            None,
            None,
            Some("1"),
            Some("2"),
        )));
        assert_eq!(all.total, 3);
        assert_eq!(all.entry.len(), 3);
        assert_eq!(all.id, "bundle-rn-attendances");
        assert_eq!(
            all.link[0].url,
            "https://api.health.gov.au/RegisteredNurseAttendance"
        );
        assert_eq!(
            all.entry[0].full_url,
            "https://api.health.gov.au/RegisteredNurseAttendance/RN-12345"
        );

        let sunset = bundle(svc.search(&AttendanceSearchParams::from_query(
            Some("SVC-54321".into()),
            None,
            None,
            None,
        )));
        assert_eq!(sunset.total, 2);

        let none = bundle(svc.search(&AttendanceSearchParams::from_query(
            Some("SVC-00000".into()),
            None,
            None,
            None,
        )));
        assert_eq!(none.total, 0);
        assert!(none.entry.is_empty());
    }

    #[test]
    fn record_policy_replaces_notes_from_json() {
        let svc = service(AttendancePatchPolicy::Record);
        let body = br#"{"note":[{"text":"first"},{"text":"second"}]}"#.to_vec();

        let outcome = svc
            .patch("RN-12345", AttendancePatch::Json(body), now())
            .expect("json update");
        let AttendancePatchOutcome::Record(record) = outcome else {
            panic!("expected a record");
        };
        let texts: Vec<&str> = record.note.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);

        let replaced = svc
            .patch(
                "RN-12345",
                AttendancePatch::Json(br#"{"note":[{"text":"only"}]}"#.to_vec()),
                now(),
            )
            .expect("second update");
        assert!(matches!(replaced, AttendancePatchOutcome::Record(r) if r.note.len() == 1));
        assert_eq!(svc.attendance("RN-12345").expect("exists").note.len(), 1);
    }

    #[test]
    fn record_policy_appends_csv_notes() {
        let svc = service(AttendancePatchPolicy::Record);
        svc.patch("RN-23456", csv("week1.csv"), now())
            .expect("first upload");
        let outcome = svc
            .patch("RN-23456", csv("week2.csv"), now())
            .expect("second upload");

        let AttendancePatchOutcome::Record(record) = outcome else {
            panic!("expected a record");
        };
        assert_eq!(record.note.len(), 2);
        assert_eq!(
            record.note[1].text,
            "CSV file 'week2.csv' processed at 2024-03-09T14:05:07Z."
        );
    }

    #[test]
    fn record_policy_checks_existence_before_content_type() {
        let svc = service(AttendancePatchPolicy::Record);
        assert!(matches!(
            svc.preflight("RN-99999", "text/plain"),
            Err(CoreError::NotFound(_))
        ));

        let err = svc
            .preflight("RN-12345", "text/plain")
            .expect_err("unsupported type");
        assert_eq!(
            err.to_string(),
            "Unsupported Content-Type: text/plain. Must be 'application/json' or 'multipart/form-data'."
        );
    }

    #[test]
    fn record_policy_rejects_malformed_json() {
        let svc = service(AttendancePatchPolicy::Record);
        let err = svc
            .patch("RN-12345", AttendancePatch::Json(b"{not json".to_vec()), now())
            .expect_err("malformed");
        match err {
            CoreError::InvalidInput(msg) => assert!(msg.starts_with("Invalid JSON payload: ")),
            other => panic!("expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn record_policy_acknowledges_submission_uploads() {
        let svc = service(AttendancePatchPolicy::Record);
        let outcome = svc
            .patch("Sub-123-456", csv("march.csv"), now())
            .expect("submission upload");

        let AttendancePatchOutcome::Record(record) = outcome else {
            panic!("expected a record");
        };
        assert_eq!(record.id, "Sub-123-456");
        assert_eq!(record.status, "completed");
        assert_eq!(record.subject.reference, "HealthcareService/SVC-54321");
        assert_eq!(record.subject.display, "Sunset Residential Care");
        assert!(record.period.is_none());
        assert_eq!(
            record.note[0].text,
            "CSV file 'march.csv' processed for submission Sub-123-456 at 2024-03-09T14:05:07Z."
        );
        assert!(!svc.store.attendances.contains("Sub-123-456"));
    }

    #[test]
    fn submission_policy_accepts_only_new_submission_uploads() {
        let svc = service(AttendancePatchPolicy::Submission);

        assert!(matches!(
            svc.preflight("Sub-1", "application/json"),
            Err(CoreError::UnsupportedMediaType(_))
        ));
        assert!(matches!(
            svc.preflight("RN-12345", "multipart/form-data; boundary=x"),
            Err(CoreError::NotFound(_))
        ));
        assert!(svc
            .preflight("Sub-1", "multipart/form-data; boundary=x")
            .is_ok());

        let outcome = svc.patch("Sub-1", csv("a.csv"), now()).expect("upload");
        assert!(matches!(outcome, AttendancePatchOutcome::Record(r) if r.id == "Sub-1"));
    }

    #[test]
    fn acknowledge_policy_decodes_without_storing() {
        let svc = service(AttendancePatchPolicy::Acknowledge);
        let body = br#"{
            "attendanceDays": [{"date": "2024-03-01", "hours": 24.0, "onSite": true}],
            "submissionStatus": "submitted",
            "unknown": "ignored"
        }"#
        .to_vec();

        let outcome = svc
            .patch("anything", AttendancePatch::Json(body), now())
            .expect("acknowledged");
        assert_eq!(
            outcome,
            AttendancePatchOutcome::Acknowledged(
                "Registered nurse attendance anything updated".into()
            )
        );

        assert!(matches!(
            svc.patch("anything", csv("x.csv"), now()),
            Err(CoreError::UnsupportedMediaType(_))
        ));
        assert!(matches!(
            svc.patch("anything", AttendancePatch::Json(b"[".to_vec()), now()),
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn unknown_attendance_is_not_found() {
        let err = service(AttendancePatchPolicy::Record)
            .attendance("RN-0")
            .expect_err("missing");
        assert_eq!(err.to_string(), "Registered nurse attendance not found");
    }
}

//! Registered nurse attendance records and the reporting views derived from them.

use crate::datatypes::{Annotation, CodeableConcept, Identifier, Period, Reference, ResourceType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn encounter() -> ResourceType {
    ResourceType::Encounter
}

/// One registered nurse shift at a healthcare service, carried as a FHIR `Encounter`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredNurseAttendance {
    #[serde(default = "encounter")]
    pub resource_type: ResourceType,
    pub id: String,
    #[serde(default)]
    pub identifier: Vec<Identifier>,
    #[serde(default)]
    pub status: String,
    /// Always a `HealthcareService/<service id>` reference.
    #[serde(default)]
    pub subject: Reference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    #[serde(default)]
    pub performer: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reason_code: Vec<CodeableConcept>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub note: Vec<Annotation>,
}

impl RegisteredNurseAttendance {
    /// True when this attendance was recorded against the service with `service_id`.
    pub fn is_for_service(&self, service_id: &str) -> bool {
        self.subject
            .points_to(ResourceType::HealthcareService, service_id)
    }
}

/// Daily compliance roll-up for a service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    pub id: String,
    pub service_id: String,
    pub service_name: String,
    pub date: DateTime<Utc>,
    pub total_hours: f64,
    pub daily_required: bool,
    pub compliant_day: bool,
    pub compliant_week: bool,
    pub compliant_month: bool,
}

/// Body of a note-only attendance update.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NotePatch {
    #[serde(default)]
    pub note: Vec<Annotation>,
}

/// Monthly attendance submission payload accepted by the acknowledge-only update policy.
///
/// Every member is optional and unknown members are ignored; the payload is never stored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSubmissionPatch {
    #[serde(default)]
    pub attendance_days: Vec<AttendanceDay>,
    #[serde(default)]
    pub reporting_period: Option<Period>,
    #[serde(default)]
    pub submission_status: Option<String>,
    #[serde(default)]
    pub coverage: Option<CoverageMetrics>,
}

/// Hours of registered nurse coverage reported for one day.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDay {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub hours: f64,
    #[serde(default)]
    pub on_site: bool,
}

/// Coverage ratios reported alongside a submission.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoverageMetrics {
    #[serde(default)]
    pub days_covered: u32,
    #[serde(default)]
    pub days_in_period: u32,
    #[serde(default)]
    pub coverage_percentage: f64,
}

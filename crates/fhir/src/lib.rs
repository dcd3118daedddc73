//! FHIR-aligned wire models for the aged-care reporting APIs.
//!
//! This crate provides the **wire models** exchanged by the mock API:
//! - provider directory resources (`Organization`, `HealthcareService`)
//! - registered nurse attendance (`Encounter`) and its summary view
//! - quality indicator `Questionnaire` / `QuestionnaireResponse`
//! - the `Bundle` search envelope and the [`Resource`] union it carries
//!
//! The models are plain data with serde and OpenAPI schema derives. Lookup, filtering and
//! mutation live in `dohac-core`; HTTP concerns live in `api-rest`.

pub mod attendance;
pub mod bundle;
pub mod datatypes;
pub mod provider;
pub mod questionnaire;
pub mod resource;

// Re-export public types
pub use attendance::{
    AttendanceDay, AttendanceSubmissionPatch, AttendanceSummary, CoverageMetrics, NotePatch,
    RegisteredNurseAttendance,
};
pub use bundle::{Bundle, BundleEntry, BundleLink};
pub use datatypes::{
    Address, Annotation, CodeableConcept, Coding, ContactPoint, Identifier, Period, Reference,
    ResourceType,
};
pub use provider::{HealthcareService, Provider};
pub use questionnaire::{
    AnswerValue, EnableWhen, Questionnaire, QuestionnaireItem, QuestionnaireResponse,
    QuestionnaireResponseItem,
};
pub use resource::Resource;

/// Errors returned by the `fhir` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum FhirError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("translation error: {0}")]
    Translation(String),
}

/// Type alias for Results that can fail with a [`FhirError`].
pub type FhirResult<T> = Result<T, FhirError>;

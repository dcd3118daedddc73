//! Constants used throughout the core crate.
//!
//! Identifier systems and wire values that several modules must agree on.

/// Base URL used for bundle links when `DOHAC_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://api.health.gov.au";

/// Client registration endpoint used when `DOHAC_REGISTRATION_URL` is not set.
pub const DEFAULT_REGISTRATION_URL: &str =
    "https://svt-iam.health.gov.au:443/am/oauth2/realms/root/realms/dohac-api/register";

/// Path segment of the attendance collection.
pub const ATTENDANCE_PATH: &str = "RegisteredNurseAttendance";

/// Id of the attendance search bundle.
pub const ATTENDANCE_BUNDLE_ID: &str = "bundle-rn-attendances";

/// Prefix of every issued access token.
pub const TOKEN_PREFIX: &str = api_shared::auth::TOKEN_PREFIX;

pub const TOKEN_TYPE: &str = "Bearer";

/// Lifetime reported for issued tokens, in seconds.
pub const TOKEN_EXPIRES_IN: u64 = 3600;

/// Fixed prefix of generated client ids; the time of day is appended.
pub const CLIENT_ID_PREFIX: &str = "c64484a9-6cb3-4ad0-b9bd-";

/// Placeholder secret handed to every registered client.
pub const CLIENT_SECRET_PLACEHOLDER: &str = "xxxxxxxxxxxxxx";

/// Prefix of generated questionnaire response ids.
pub const RESPONSE_ID_PREFIX: &str = "QR-";

/// Prefix an id must carry under the submission patch policy.
pub const SUBMISSION_ID_PREFIX: &str = "Sub-";

/// Service every acknowledged submission is recorded against.
pub const SUBMISSION_SERVICE_ID: &str = "SVC-54321";

/// `chrono` format for compact timestamps (`YYYYMMDDhhmmss`).
pub const COMPACT_TIMESTAMP: &str = "%Y%m%d%H%M%S";

/// `chrono` format for compact time of day (`hhmmss`).
pub const COMPACT_TIME: &str = "%H%M%S";

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_PAGE: u32 = 1;

// Identifier and code systems.
pub const HPIO_SYSTEM: &str = "http://ns.health.gov.au/id/hi/hpio";
pub const NAPS_SYSTEM: &str = "http://ns.health.gov.au/id/provider/naps";
pub const AGED_CARE_SERVICE_SYSTEM: &str = "http://ns.health.gov.au/id/service/aged-care";
pub const RN_ATTENDANCE_SYSTEM: &str = "http://ns.health.gov.au/id/attendance/rn";
pub const ORGANIZATION_TYPE_SYSTEM: &str = "http://terminology.hl7.org/CodeSystem/organization-type";
pub const SERVICE_CATEGORY_SYSTEM: &str = "http://terminology.hl7.org/CodeSystem/service-category";
pub const SERVICE_TYPE_SYSTEM: &str = "http://terminology.hl7.org/CodeSystem/service-type";
pub const SERVICE_PROVISION_SYSTEM: &str =
    "http://terminology.hl7.org/CodeSystem/service-provision-conditions";
pub const ENCOUNTER_REASON_SYSTEM: &str = "http://terminology.hl7.org/CodeSystem/encounter-reason";

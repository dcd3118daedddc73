//! # DoHAC Core
//!
//! Core logic for the mock aged-care reporting API.
//!
//! This crate holds the data and the operations on it:
//! - Hand-authored fixtures and the in-memory repositories serving them
//! - Provider directory, quality indicator and attendance services
//! - Mock OAuth2 token issuance and client registration
//! - Startup configuration
//!
//! **No API concerns**: routing, content negotiation and the bearer gate belong in `api-rest`.
//! Services take the current time as an argument so their output is deterministic under test.

pub mod auth;
pub mod config;
pub mod constants;
pub mod error;
pub mod fixtures;
pub mod repositories;
pub mod store;

pub use auth::AuthService;
pub use config::{AttendancePatchPolicy, CoreConfig};
pub use dohac_types::NonEmptyText;
pub use error::{CoreError, CoreResult};
pub use fixtures::Fixtures;
pub use repositories::attendance::{
    AttendancePatch, AttendancePatchOutcome, AttendanceSearch, AttendanceSearchParams,
    AttendanceService, CsvUpload, Paging,
};
pub use repositories::provider::ProviderService;
pub use repositories::quality::QualityService;
pub use repositories::{InMemoryRepository, Record, Repository};
pub use store::Store;

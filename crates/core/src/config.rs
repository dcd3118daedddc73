//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into the services. Nothing in
//! request handling reads process-wide environment variables, so tests can build any
//! configuration they need side by side.

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_REGISTRATION_URL};
use crate::{CoreError, CoreResult};
use std::fmt;
use std::str::FromStr;

/// Behaviour of `PATCH /RegisteredNurseAttendance/{id}`.
///
/// Exactly one policy is active per process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AttendancePatchPolicy {
    /// Update an existing record: JSON replaces the notes, a CSV upload appends one. Multipart
    /// uploads against `Sub-` ids are acknowledged as submissions.
    #[default]
    Record,
    /// Acknowledge CSV uploads against `Sub-` submission ids without storing anything.
    Submission,
    /// Accept a JSON submission payload and acknowledge it with a message.
    Acknowledge,
}

impl AttendancePatchPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            AttendancePatchPolicy::Record => "record",
            AttendancePatchPolicy::Submission => "submission",
            AttendancePatchPolicy::Acknowledge => "acknowledge",
        }
    }
}

impl fmt::Display for AttendancePatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendancePatchPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "record" => Ok(AttendancePatchPolicy::Record),
            "submission" => Ok(AttendancePatchPolicy::Submission),
            "acknowledge" => Ok(AttendancePatchPolicy::Acknowledge),
            other => Err(CoreError::Config(format!(
                "unknown attendance patch policy '{other}' (expected record, submission or acknowledge)"
            ))),
        }
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    base_url: String,
    registration_url: String,
    patch_policy: AttendancePatchPolicy,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// Trailing slashes are stripped from both URLs so that paths can be joined with `/`.
    pub fn new(
        base_url: String,
        registration_url: String,
        patch_policy: AttendancePatchPolicy,
    ) -> CoreResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            return Err(CoreError::Config("base_url cannot be empty".into()));
        }

        let registration_url = registration_url.trim().trim_end_matches('/').to_owned();
        if registration_url.is_empty() {
            return Err(CoreError::Config("registration_url cannot be empty".into()));
        }

        Ok(Self {
            base_url,
            registration_url,
            patch_policy,
        })
    }

    /// Builds a configuration from raw environment values, applying defaults for absent or
    /// blank ones.
    pub fn from_env_values(
        base_url: Option<String>,
        registration_url: Option<String>,
        patch_policy: Option<String>,
    ) -> CoreResult<Self> {
        Self::new(
            non_blank(base_url).unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            non_blank(registration_url).unwrap_or_else(|| DEFAULT_REGISTRATION_URL.to_owned()),
            patch_policy_from_env_value(patch_policy)?,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn registration_url(&self) -> &str {
        &self.registration_url
    }

    pub fn patch_policy(&self) -> AttendancePatchPolicy {
        self.patch_policy
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            registration_url: DEFAULT_REGISTRATION_URL.to_owned(),
            patch_policy: AttendancePatchPolicy::default(),
        }
    }
}

/// Parse an attendance patch policy from an optional environment variable value.
///
/// - If `value` is `None` or blank, returns [`AttendancePatchPolicy::Record`].
/// - Otherwise parses the trimmed value case-insensitively.
pub fn patch_policy_from_env_value(value: Option<String>) -> CoreResult<AttendancePatchPolicy> {
    let parsed = non_blank(value)
        .map(|v| v.parse::<AttendancePatchPolicy>())
        .transpose()?;

    Ok(parsed.unwrap_or_default())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

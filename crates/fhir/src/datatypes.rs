//! FHIR general-purpose datatypes shared by every resource in the directory.
//!
//! These mirror the subset of FHIR R4 datatypes the reporting APIs exchange. Optional members
//! are omitted from the wire form when empty.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Discriminator carried in every resource's `resourceType` member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ResourceType {
    /// Wire name of a [`crate::Provider`].
    Organization,
    HealthcareService,
    /// Wire name of a [`crate::RegisteredNurseAttendance`].
    Encounter,
    Questionnaire,
    QuestionnaireResponse,
    Bundle,
}

impl ResourceType {
    /// Returns the wire string for this resource type.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceType::Organization => "Organization",
            ResourceType::HealthcareService => "HealthcareService",
            ResourceType::Encounter => "Encounter",
            ResourceType::Questionnaire => "Questionnaire",
            ResourceType::QuestionnaireResponse => "QuestionnaireResponse",
            ResourceType::Bundle => "Bundle",
        }
    }

    /// Parse a wire string into a resource type.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "Organization" => Some(ResourceType::Organization),
            "HealthcareService" => Some(ResourceType::HealthcareService),
            "Encounter" => Some(ResourceType::Encounter),
            "Questionnaire" => Some(ResourceType::Questionnaire),
            "QuestionnaireResponse" => Some(ResourceType::QuestionnaireResponse),
            "Bundle" => Some(ResourceType::Bundle),
            _ => None,
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Namespaced external identifier.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Identifier {
    pub system: String,
    pub value: String,
}

impl Identifier {
    pub fn new(system: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            value: value.into(),
        }
    }
}

/// A single code from a controlled vocabulary.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coding {
    pub system: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display: String,
}

/// A concept expressed as one or more codings plus optional free text.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CodeableConcept {
    #[serde(default)]
    pub coding: Vec<Coding>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
}

impl CodeableConcept {
    /// Builds a concept with a single coding whose display doubles as the concept text.
    pub fn single(system: &str, code: &str, display: &str, text: &str) -> Self {
        Self {
            coding: vec![Coding {
                system: system.to_owned(),
                code: code.to_owned(),
                display: display.to_owned(),
            }],
            text: text.to_owned(),
        }
    }
}

/// Phone, email or other contact channel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContactPoint {
    pub system: String,
    pub value: String,
    #[serde(rename = "use", default, skip_serializing_if = "String::is_empty")]
    pub use_type: String,
}

/// Postal or physical address.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(rename = "use", default, skip_serializing_if = "String::is_empty")]
    pub use_type: String,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub address_type: String,
    #[serde(default)]
    pub line: Vec<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country: String,
}

/// A string-keyed link to another resource: `"<ResourceType>/<id>"`.
///
/// References are never resolved eagerly; they are compared as strings when filtering.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Reference {
    #[serde(default)]
    pub reference: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display: String,
}

impl Reference {
    /// Builds `"<resource_type>/<id>"` with a display label.
    pub fn to(resource_type: ResourceType, id: &str, display: &str) -> Self {
        Self {
            reference: Self::key(resource_type, id),
            display: display.to_owned(),
        }
    }

    /// The lookup key a record of `resource_type` with `id` is referenced by.
    pub fn key(resource_type: ResourceType, id: &str) -> String {
        format!("{resource_type}/{id}")
    }

    /// True when this reference points at `resource_type`/`id`.
    pub fn points_to(&self, resource_type: ResourceType, id: &str) -> bool {
        self.reference
            .strip_prefix(resource_type.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
            == Some(id)
    }
}

/// A time range with a mandatory start.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Period {
    pub start: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
}

/// Free-text note.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Annotation {
    pub text: String,
}

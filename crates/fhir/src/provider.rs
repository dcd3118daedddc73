//! Provider directory resources: approved providers and the healthcare services they run.

use crate::datatypes::{
    Address, CodeableConcept, ContactPoint, Identifier, Reference, ResourceType,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn organization() -> ResourceType {
    ResourceType::Organization
}

fn healthcare_service() -> ResourceType {
    ResourceType::HealthcareService
}

/// An approved aged-care provider (a FHIR `Organization`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: String,
    #[serde(default = "organization")]
    pub resource_type: ResourceType,
    #[serde(default)]
    pub identifier: Vec<Identifier>,
    #[serde(default)]
    pub active: bool,
    #[serde(rename = "type", default)]
    pub provider_type: Vec<CodeableConcept>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub telecom: Vec<ContactPoint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub address: Vec<Address>,
    /// Parent organisation, when this provider belongs to a larger group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of: Option<Reference>,
}

/// A service delivered by a provider, e.g. a residential aged-care facility.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthcareService {
    pub id: String,
    #[serde(default = "healthcare_service")]
    pub resource_type: ResourceType,
    #[serde(default)]
    pub identifier: Vec<Identifier>,
    #[serde(default)]
    pub active: bool,
    /// Always an `Organization/<provider id>` reference.
    #[serde(default)]
    pub provided_by: Reference,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category: Vec<CodeableConcept>,
    #[serde(rename = "type", default, skip_serializing_if = "Vec::is_empty")]
    pub service_type: Vec<CodeableConcept>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_provision_code: Vec<CodeableConcept>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub location: Vec<Reference>,
}

impl HealthcareService {
    /// True when this service is provided by the organisation with `provider_id`.
    pub fn is_provided_by(&self, provider_id: &str) -> bool {
        self.provided_by
            .points_to(ResourceType::Organization, provider_id)
    }
}

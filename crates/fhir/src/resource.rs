//! The closed set of resources that can travel inside a [`crate::Bundle`].
//!
//! `Resource` serialises as the wrapped resource itself. Deserialisation reads the
//! `resourceType` discriminator first and then decodes the matching variant, so a
//! bundle entry never silently decodes as the wrong kind.

use crate::attendance::RegisteredNurseAttendance;
use crate::datatypes::ResourceType;
use crate::provider::{HealthcareService, Provider};
use crate::questionnaire::{Questionnaire, QuestionnaireResponse};
use crate::{FhirError, FhirResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum Resource {
    Provider(Provider),
    HealthcareService(HealthcareService),
    RegisteredNurseAttendance(RegisteredNurseAttendance),
    Questionnaire(Questionnaire),
    QuestionnaireResponse(QuestionnaireResponse),
}

impl Resource {
    /// Returns the wire discriminator of the wrapped resource.
    pub fn resource_type(&self) -> ResourceType {
        match self {
            Resource::Provider(_) => ResourceType::Organization,
            Resource::HealthcareService(_) => ResourceType::HealthcareService,
            Resource::RegisteredNurseAttendance(_) => ResourceType::Encounter,
            Resource::Questionnaire(_) => ResourceType::Questionnaire,
            Resource::QuestionnaireResponse(_) => ResourceType::QuestionnaireResponse,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Resource::Provider(r) => &r.id,
            Resource::HealthcareService(r) => &r.id,
            Resource::RegisteredNurseAttendance(r) => &r.id,
            Resource::Questionnaire(r) => &r.id,
            Resource::QuestionnaireResponse(r) => &r.id,
        }
    }

    /// Decode a resource from JSON, dispatching on `resourceType`.
    ///
    /// # Errors
    ///
    /// Returns [`FhirError::InvalidInput`] if the discriminator is missing or names a resource
    /// outside this set, and [`FhirError::Translation`] (with the failing path) if the body does
    /// not match the selected resource's schema.
    pub fn from_value(value: serde_json::Value) -> FhirResult<Self> {
        let resource_type = value
            .get("resourceType")
            .and_then(|v| v.as_str())
            .ok_or_else(|| FhirError::InvalidInput("missing resourceType".into()))?;

        let resource_type = ResourceType::from_wire(resource_type).ok_or_else(|| {
            FhirError::InvalidInput(format!("unsupported resourceType '{resource_type}'"))
        })?;

        match resource_type {
            ResourceType::Organization => decode(resource_type, value).map(Resource::Provider),
            ResourceType::HealthcareService => {
                decode(resource_type, value).map(Resource::HealthcareService)
            }
            ResourceType::Encounter => {
                decode(resource_type, value).map(Resource::RegisteredNurseAttendance)
            }
            ResourceType::Questionnaire => {
                decode(resource_type, value).map(Resource::Questionnaire)
            }
            ResourceType::QuestionnaireResponse => {
                decode(resource_type, value).map(Resource::QuestionnaireResponse)
            }
            ResourceType::Bundle => Err(FhirError::InvalidInput(
                "a Bundle cannot be nested as a bundle entry".into(),
            )),
        }
    }
}

fn decode<T: DeserializeOwned>(
    resource_type: ResourceType,
    value: serde_json::Value,
) -> FhirResult<T> {
    serde_path_to_error::deserialize::<_, T>(value).map_err(|err| {
        let path = err.path().to_string();
        let source = err.into_inner();
        let path = if path.is_empty() {
            "<root>"
        } else {
            path.as_str()
        };
        FhirError::Translation(format!(
            "{resource_type} schema mismatch at {path}: {source}"
        ))
    })
}

impl<'de> Deserialize<'de> for Resource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Resource::from_value(value).map_err(serde::de::Error::custom)
    }
}

impl From<Provider> for Resource {
    fn from(value: Provider) -> Self {
        Resource::Provider(value)
    }
}

impl From<HealthcareService> for Resource {
    fn from(value: HealthcareService) -> Self {
        Resource::HealthcareService(value)
    }
}

impl From<RegisteredNurseAttendance> for Resource {
    fn from(value: RegisteredNurseAttendance) -> Self {
        Resource::RegisteredNurseAttendance(value)
    }
}

impl From<Questionnaire> for Resource {
    fn from(value: Questionnaire) -> Self {
        Resource::Questionnaire(value)
    }
}

impl From<QuestionnaireResponse> for Resource {
    fn from(value: QuestionnaireResponse) -> Self {
        Resource::QuestionnaireResponse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dispatches_on_resource_type() {
        let value = json!({
            "resourceType": "Encounter",
            "id": "RN-1",
            "status": "finished",
            "subject": {"reference": "HealthcareService/SVC-1"},
            "period": {"start": "2023-07-01T07:00:00Z"}
        });

        let resource = Resource::from_value(value).expect("should decode");
        assert_eq!(resource.resource_type(), ResourceType::Encounter);
        assert_eq!(resource.id(), "RN-1");
        assert!(matches!(resource, Resource::RegisteredNurseAttendance(_)));
    }

    #[test]
    fn rejects_unknown_and_missing_discriminators() {
        let err = Resource::from_value(json!({"resourceType": "Patient", "id": "p"}))
            .expect_err("Patient is outside the set");
        match err {
            FhirError::InvalidInput(msg) => assert!(msg.contains("Patient")),
            other => panic!("expected InvalidInput error, got {other:?}"),
        }

        let err = Resource::from_value(json!({"id": "p"})).expect_err("missing discriminator");
        assert!(matches!(err, FhirError::InvalidInput(_)));
    }

    #[test]
    fn reports_schema_mismatch_path() {
        let value = json!({
            "resourceType": "Encounter",
            "id": "RN-1",
            "period": {"start": "not-a-date"}
        });

        let err = Resource::from_value(value).expect_err("bad timestamp");
        match err {
            FhirError::Translation(msg) => {
                assert!(msg.contains("Encounter"));
                assert!(msg.contains("period.start"));
            }
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn serializes_as_inner_resource() {
        let value = json!({
            "id": "SVC-1",
            "resourceType": "HealthcareService",
            "identifier": [],
            "active": true,
            "providedBy": {"reference": "Organization/PRV-1"},
            "name": "Service"
        });
        let resource = Resource::from_value(value.clone()).expect("should decode");
        assert_eq!(serde_json::to_value(&resource).expect("serialize"), value);
    }
}

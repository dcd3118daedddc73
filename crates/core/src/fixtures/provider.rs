use super::concept;
use crate::constants::{
    AGED_CARE_SERVICE_SYSTEM, HPIO_SYSTEM, NAPS_SYSTEM, ORGANIZATION_TYPE_SYSTEM,
    SERVICE_CATEGORY_SYSTEM, SERVICE_PROVISION_SYSTEM, SERVICE_TYPE_SYSTEM,
};
use fhir::{
    Address, CodeableConcept, ContactPoint, HealthcareService, Identifier, Provider, Reference,
    ResourceType,
};

struct ProviderSeed {
    id: &'static str,
    hpio: &'static str,
    name: &'static str,
    phone: &'static str,
    email: &'static str,
    line: &'static str,
    city: &'static str,
    state: &'static str,
    postal_code: &'static str,
}

const PROVIDERS: [ProviderSeed; 2] = [
    ProviderSeed {
        id: "PRV-12345",
        hpio: "8003627500000328",
        name: "Sunset Aged Care",
        phone: "0398765432",
        email: "info@sunsetagedcare.com.au",
        line: "123 Sunset Boulevard",
        city: "Melbourne",
        state: "VIC",
        postal_code: "3000",
    },
    ProviderSeed {
        id: "PRV-67890",
        hpio: "8003627500000329",
        name: "Golden Years Care",
        phone: "0399876543",
        email: "info@goldenyearscare.com.au",
        line: "456 Golden Road",
        city: "Sydney",
        state: "NSW",
        postal_code: "2000",
    },
];

pub(super) fn providers() -> Vec<Provider> {
    PROVIDERS.iter().map(provider).collect()
}

fn provider(seed: &ProviderSeed) -> Provider {
    let contact = |system: &str, value: &str| ContactPoint {
        system: system.to_owned(),
        value: value.to_owned(),
        use_type: "work".to_owned(),
    };

    Provider {
        id: seed.id.to_owned(),
        resource_type: ResourceType::Organization,
        identifier: vec![
            Identifier::new(HPIO_SYSTEM, seed.hpio),
            Identifier::new(NAPS_SYSTEM, seed.id),
        ],
        active: true,
        provider_type: vec![concept(
            ORGANIZATION_TYPE_SYSTEM,
            "prov",
            "Healthcare Provider",
        )],
        name: seed.name.to_owned(),
        telecom: vec![contact("phone", seed.phone), contact("email", seed.email)],
        address: vec![Address {
            use_type: "work".to_owned(),
            address_type: "physical".to_owned(),
            line: vec![seed.line.to_owned()],
            city: seed.city.to_owned(),
            state: seed.state.to_owned(),
            postal_code: seed.postal_code.to_owned(),
            country: "Australia".to_owned(),
        }],
        part_of: None,
    }
}

struct ServiceSeed {
    id: &'static str,
    provider_id: &'static str,
    provider_name: &'static str,
    type_code: &'static str,
    type_display: &'static str,
    name: &'static str,
    comment: &'static str,
}

const SERVICES: [ServiceSeed; 3] = [
    ServiceSeed {
        id: "SVC-54321",
        provider_id: "PRV-12345",
        provider_name: "Sunset Aged Care",
        type_code: "124",
        type_display: "Residential Aged Care",
        name: "Sunset Residential Care",
        comment: "Providing high quality residential aged care",
    },
    ServiceSeed {
        id: "SVC-98765",
        provider_id: "PRV-12345",
        provider_name: "Sunset Aged Care",
        type_code: "125",
        type_display: "Home Care",
        name: "Sunset Home Care",
        comment: "Providing support services in the home",
    },
    ServiceSeed {
        id: "SVC-24680",
        provider_id: "PRV-67890",
        provider_name: "Golden Years Care",
        type_code: "124",
        type_display: "Residential Aged Care",
        name: "Golden Years Residential Care",
        comment: "Quality care in a comfortable environment",
    },
];

pub(super) fn healthcare_services() -> Vec<HealthcareService> {
    SERVICES.iter().map(healthcare_service).collect()
}

fn healthcare_service(seed: &ServiceSeed) -> HealthcareService {
    HealthcareService {
        id: seed.id.to_owned(),
        resource_type: ResourceType::HealthcareService,
        identifier: vec![Identifier::new(AGED_CARE_SERVICE_SYSTEM, seed.id)],
        active: true,
        provided_by: Reference::to(
            ResourceType::Organization,
            seed.provider_id,
            seed.provider_name,
        ),
        category: vec![concept(SERVICE_CATEGORY_SYSTEM, "8", "Aged Care Service")],
        service_type: vec![concept(
            SERVICE_TYPE_SYSTEM,
            seed.type_code,
            seed.type_display,
        )],
        name: seed.name.to_owned(),
        comment: seed.comment.to_owned(),
        service_provision_code: vec![CodeableConcept::single(
            SERVICE_PROVISION_SYSTEM,
            "free",
            "Free",
            "Government Funded",
        )],
        location: Vec::new(),
    }
}

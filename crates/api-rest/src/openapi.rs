use crate::handlers;
use api_shared::{
    ClientRegistrationRequest, ClientRegistrationResponse, ClientUpdateRequest, ErrorRes,
    HealthRes, MessageRes, TokenRequest, TokenResponse,
};
use fhir::{
    Address, Annotation, AnswerValue, AttendanceDay, AttendanceSubmissionPatch,
    AttendanceSummary, Bundle, BundleEntry, BundleLink, CodeableConcept, Coding, ContactPoint,
    CoverageMetrics, EnableWhen, HealthcareService, Identifier, NotePatch, Period, Provider,
    Questionnaire, QuestionnaireItem, QuestionnaireResponse, QuestionnaireResponseItem, Reference,
    RegisteredNurseAttendance, Resource, ResourceType,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    info(title = "DoHAC mock APIs"),
    paths(
        handlers::health::health,
        handlers::auth::create_access_token,
        handlers::auth::register_client,
        handlers::auth::update_client,
        handlers::auth::delete_client,
        handlers::provider::list_providers,
        handlers::provider::get_provider,
        handlers::provider::list_services,
        handlers::provider::get_service,
        handlers::quality::list_questionnaires,
        handlers::quality::get_questionnaire,
        handlers::quality::list_responses,
        handlers::quality::get_response,
        handlers::quality::create_response,
        handlers::nurses::list_attendances,
        handlers::nurses::get_attendance,
        handlers::nurses::update_attendance,
    ),
    components(schemas(
        HealthRes,
        ErrorRes,
        MessageRes,
        TokenRequest,
        TokenResponse,
        ClientRegistrationRequest,
        ClientRegistrationResponse,
        ClientUpdateRequest,
        ResourceType,
        Identifier,
        Coding,
        CodeableConcept,
        ContactPoint,
        Address,
        Reference,
        Period,
        Annotation,
        Provider,
        HealthcareService,
        RegisteredNurseAttendance,
        AttendanceSummary,
        NotePatch,
        AttendanceSubmissionPatch,
        AttendanceDay,
        CoverageMetrics,
        AnswerValue,
        EnableWhen,
        Questionnaire,
        QuestionnaireItem,
        QuestionnaireResponse,
        QuestionnaireResponseItem,
        Resource,
        Bundle,
        BundleEntry,
        BundleLink,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "health", description = "Liveness"),
        (name = "oauth2", description = "Mock token issuance and client registration"),
        (name = "provider", description = "Provider directory"),
        (name = "quality", description = "Quality indicator questionnaires"),
        (name = "nurses", description = "Registered nurse attendance")
    )
)]
pub struct ApiDoc;

/// Declares the `bearer` scheme the protected paths refer to.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/api/health",
            "/api/oauth2/access-tokens",
            "/api/oauth2/registration/{id}",
            "/api/Provider/{id}",
            "/api/HealthcareService",
            "/api/QuestionnaireResponse",
            "/api/RegisteredNurseAttendance/{id}",
        ] {
            assert!(paths.contains(&expected), "missing path {expected}");
        }
    }

    #[test]
    fn bearer_scheme_is_declared() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components present");
        assert!(components.security_schemes.contains_key("bearer"));
    }
}

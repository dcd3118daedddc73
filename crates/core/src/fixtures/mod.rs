//! Hand-authored data the mock API serves.
//!
//! Fixtures are built once at startup by [`Fixtures::load`] and moved into a
//! [`Store`](crate::store::Store). Cross-references between collections are plain
//! `"<Type>/<id>"` strings; nothing checks that they resolve.

mod attendance;
mod provider;
mod quality;

use chrono::{DateTime, TimeZone, Utc};
use fhir::{
    AttendanceSummary, CodeableConcept, HealthcareService, Provider, Questionnaire,
    QuestionnaireResponse, RegisteredNurseAttendance,
};

/// Every fixture collection.
#[derive(Clone, Debug)]
pub struct Fixtures {
    pub providers: Vec<Provider>,
    pub healthcare_services: Vec<HealthcareService>,
    pub attendances: Vec<RegisteredNurseAttendance>,
    pub attendance_summaries: Vec<AttendanceSummary>,
    pub questionnaires: Vec<Questionnaire>,
    pub questionnaire_responses: Vec<QuestionnaireResponse>,
}

impl Fixtures {
    pub fn load() -> Self {
        Self {
            providers: provider::providers(),
            healthcare_services: provider::healthcare_services(),
            attendances: attendance::attendances(),
            attendance_summaries: attendance::summaries(),
            questionnaires: quality::questionnaires(),
            questionnaire_responses: quality::responses(),
        }
    }
}

/// Fixed UTC timestamp. Fixture dates are literals checked by the tests below, so an
/// out-of-range literal falls back to the epoch rather than aborting startup.
fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

/// A concept with a single coding whose text repeats the display.
fn concept(system: &str, code: &str, display: &str) -> CodeableConcept {
    CodeableConcept::single(system, code, display, display)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fhir::ResourceType;
    use std::collections::HashSet;

    fn assert_unique<'a>(ids: impl Iterator<Item = &'a str>, what: &str) {
        let mut seen = HashSet::new();
        for id in ids {
            assert!(seen.insert(id), "duplicate {what} id {id}");
        }
    }

    #[test]
    fn ids_are_unique_per_collection() {
        let f = Fixtures::load();
        assert_unique(f.providers.iter().map(|r| r.id.as_str()), "provider");
        assert_unique(f.healthcare_services.iter().map(|r| r.id.as_str()), "service");
        assert_unique(f.attendances.iter().map(|r| r.id.as_str()), "attendance");
        assert_unique(f.attendance_summaries.iter().map(|r| r.id.as_str()), "summary");
        assert_unique(f.questionnaires.iter().map(|r| r.id.as_str()), "questionnaire");
        assert_unique(
            f.questionnaire_responses.iter().map(|r| r.id.as_str()),
            "response",
        );
    }

    #[test]
    fn collection_sizes_match_published_data() {
        let f = Fixtures::load();
        assert_eq!(f.providers.len(), 2);
        assert_eq!(f.healthcare_services.len(), 3);
        assert_eq!(f.attendances.len(), 3);
        assert_eq!(f.attendance_summaries.len(), 2);
        assert_eq!(f.questionnaires.len(), 1);
        assert_eq!(f.questionnaire_responses.len(), 1);
        assert_eq!(f.questionnaires[0].item.len(), 5);
    }

    #[test]
    fn references_resolve_within_fixtures() {
        let f = Fixtures::load();
        for service in &f.healthcare_services {
            assert!(
                f.providers.iter().any(|p| service.is_provided_by(&p.id)),
                "{} has a dangling providedBy",
                service.id
            );
        }
        for attendance in &f.attendances {
            assert!(
                f.healthcare_services
                    .iter()
                    .any(|s| attendance.is_for_service(&s.id)),
                "{} has a dangling subject",
                attendance.id
            );
        }
        for response in &f.questionnaire_responses {
            assert!(f
                .questionnaires
                .iter()
                .any(|q| q.id == response.questionnaire));
        }
    }

    #[test]
    fn timestamps_are_not_epoch_fallbacks() {
        let f = Fixtures::load();
        let epoch = DateTime::<Utc>::default();
        for attendance in &f.attendances {
            let period = attendance.period.as_ref().expect("fixture has a period");
            assert_ne!(period.start, epoch);
            assert!(period.end.is_some_and(|end| end > period.start));
        }
        for summary in &f.attendance_summaries {
            assert_ne!(summary.date, epoch);
        }
        assert!(f.questionnaire_responses[0]
            .authored_on
            .is_some_and(|t| t != epoch));
    }

    #[test]
    fn resource_types_are_set() {
        let f = Fixtures::load();
        assert!(f
            .providers
            .iter()
            .all(|p| p.resource_type == ResourceType::Organization));
        assert!(f
            .attendances
            .iter()
            .all(|a| a.resource_type == ResourceType::Encounter));
    }
}

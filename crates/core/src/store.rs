//! The set of repositories a running server works against.

use crate::fixtures::Fixtures;
use crate::repositories::{InMemoryRepository, Repository};
use fhir::{
    AttendanceSummary, HealthcareService, Provider, Questionnaire, QuestionnaireResponse,
    RegisteredNurseAttendance,
};
use std::sync::Arc;

/// Repositories for every resource kind.
///
/// Constructed once at startup and shared through `Arc`; each field can be swapped for another
/// [`Repository`] implementation independently.
#[derive(Clone)]
pub struct Store {
    pub providers: Arc<dyn Repository<Provider>>,
    pub healthcare_services: Arc<dyn Repository<HealthcareService>>,
    pub attendances: Arc<dyn Repository<RegisteredNurseAttendance>>,
    pub attendance_summaries: Arc<dyn Repository<AttendanceSummary>>,
    pub questionnaires: Arc<dyn Repository<Questionnaire>>,
    pub questionnaire_responses: Arc<dyn Repository<QuestionnaireResponse>>,
}

impl Store {
    /// A store holding the published fixture data.
    pub fn seeded() -> Self {
        Self::from_fixtures(Fixtures::load())
    }

    /// A store with every collection empty.
    pub fn empty() -> Self {
        Self {
            providers: Arc::new(InMemoryRepository::new()),
            healthcare_services: Arc::new(InMemoryRepository::new()),
            attendances: Arc::new(InMemoryRepository::new()),
            attendance_summaries: Arc::new(InMemoryRepository::new()),
            questionnaires: Arc::new(InMemoryRepository::new()),
            questionnaire_responses: Arc::new(InMemoryRepository::new()),
        }
    }

    pub fn from_fixtures(fixtures: Fixtures) -> Self {
        Self {
            providers: Arc::new(InMemoryRepository::seeded(fixtures.providers)),
            healthcare_services: Arc::new(InMemoryRepository::seeded(
                fixtures.healthcare_services,
            )),
            attendances: Arc::new(InMemoryRepository::seeded(fixtures.attendances)),
            attendance_summaries: Arc::new(InMemoryRepository::seeded(
                fixtures.attendance_summaries,
            )),
            questionnaires: Arc::new(InMemoryRepository::seeded(fixtures.questionnaires)),
            questionnaire_responses: Arc::new(InMemoryRepository::seeded(
                fixtures.questionnaire_responses,
            )),
        }
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("providers", &self.providers.list().len())
            .field("healthcare_services", &self.healthcare_services.list().len())
            .field("attendances", &self.attendances.list().len())
            .field("questionnaire_responses", &self.questionnaire_responses.list().len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_and_empty_stores() {
        let seeded = Store::seeded();
        assert_eq!(seeded.providers.list().len(), 2);
        assert!(seeded.questionnaire_responses.contains("QR-12345"));

        let empty = Store::empty();
        assert!(empty.providers.list().is_empty());
        assert!(empty.attendance_summaries.list().is_empty());
    }
}

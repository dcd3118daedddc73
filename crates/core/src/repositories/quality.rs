//! Quality indicator questionnaires and submitted responses.

use crate::constants::{COMPACT_TIMESTAMP, RESPONSE_ID_PREFIX};
use crate::store::Store;
use crate::{CoreError, CoreResult};
use chrono::{DateTime, Utc};
use dohac_types::NonEmptyText;
use fhir::{Questionnaire, QuestionnaireResponse, ResourceType};
use std::sync::Arc;

/// Unix seconds of `0001-01-01T00:00:00Z`, the zero timestamp some clients send for "unset".
const ZERO_TIME_UNIX: i64 = -62_135_596_800;

fn is_zero_time(t: DateTime<Utc>) -> bool {
    t.timestamp() <= ZERO_TIME_UNIX
}

/// Access to questionnaires and their responses. Responses are the only collection that grows.
#[derive(Clone, Debug)]
pub struct QualityService {
    store: Arc<Store>,
}

impl QualityService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn list_questionnaires(&self) -> Vec<Questionnaire> {
        self.store.questionnaires.list()
    }

    pub fn questionnaire(&self, id: &str) -> CoreResult<Questionnaire> {
        self.store
            .questionnaires
            .get(id)
            .ok_or_else(|| CoreError::NotFound("Questionnaire not found".into()))
    }

    pub fn list_responses(&self) -> Vec<QuestionnaireResponse> {
        self.store.questionnaire_responses.list()
    }

    pub fn response(&self, id: &str) -> CoreResult<QuestionnaireResponse> {
        self.store
            .questionnaire_responses
            .get(id)
            .ok_or_else(|| CoreError::NotFound("Questionnaire response not found".into()))
    }

    /// Stores a submitted questionnaire response.
    ///
    /// `questionnaire` and `subject.reference` are required. Missing members are defaulted:
    /// the id becomes `QR-<YYYYMMDDhhmmss>` of `now`, the status `completed`, and the authored
    /// time `now` (also when it is the zero timestamp). A generated id that is already taken gets a `-2`, `-3`, ... suffix.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidInput` if a required member is empty or a client-supplied id
    /// is already stored.
    pub fn create_response(
        &self,
        mut response: QuestionnaireResponse,
        now: DateTime<Utc>,
    ) -> CoreResult<QuestionnaireResponse> {
        let required = NonEmptyText::new(&response.questionnaire)
            .and_then(|_| NonEmptyText::new(&response.subject.reference));
        if required.is_err() {
            return Err(CoreError::InvalidInput(
                "questionnaire and subject are required".into(),
            ));
        }

        response.resource_type = ResourceType::QuestionnaireResponse;
        if response.status.is_empty() {
            response.status = "completed".into();
        }
        if response.authored_on.map_or(true, is_zero_time) {
            response.authored_on = Some(now);
        }

        if !response.id.is_empty() {
            let stored = self.store.questionnaire_responses.append(response)?;
            tracing::info!(id = %stored.id, questionnaire = %stored.questionnaire, "stored questionnaire response");
            return Ok(stored);
        }

        let base = format!("{RESPONSE_ID_PREFIX}{}", now.format(COMPACT_TIMESTAMP));
        let mut attempt = 1u32;
        loop {
            response.id = if attempt == 1 {
                base.clone()
            } else {
                format!("{base}-{attempt}")
            };
            match self.store.questionnaire_responses.append(response.clone()) {
                Ok(stored) => {
                    tracing::info!(id = %stored.id, questionnaire = %stored.questionnaire, "stored questionnaire response");
                    return Ok(stored);
                }
                // Duplicate id: try the next suffix.
                Err(CoreError::InvalidInput(_)) => {
                    tracing::debug!(id = %response.id, "generated response id taken");
                    attempt += 1;
                }
                Err(other) => return Err(other),
            }
        }
    }
}

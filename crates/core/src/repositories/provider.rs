//! Provider directory lookups.

use crate::store::Store;
use crate::{CoreError, CoreResult};
use fhir::{HealthcareService, Provider};
use std::sync::Arc;

/// Read-only access to providers and the healthcare services they run.
#[derive(Clone, Debug)]
pub struct ProviderService {
    store: Arc<Store>,
}

impl ProviderService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn list_providers(&self) -> Vec<Provider> {
        self.store.providers.list()
    }

    /// # Errors
    ///
    /// `CoreError::NotFound` when no provider has `id`.
    pub fn provider(&self, id: &str) -> CoreResult<Provider> {
        self.store
            .providers
            .get(id)
            .ok_or_else(|| CoreError::NotFound("Provider not found".into()))
    }

    /// Healthcare services, optionally restricted to those provided by `organization`.
    ///
    /// An absent or empty `organization` returns every service. An organization that matches
    /// nothing yields an empty list, not an error.
    pub fn list_services(&self, organization: Option<&str>) -> Vec<HealthcareService> {
        match organization.filter(|org| !org.is_empty()) {
            Some(org) => self
                .store
                .healthcare_services
                .filter(&|service| service.is_provided_by(org)),
            None => self.store.healthcare_services.list(),
        }
    }

    /// # Errors
    ///
    /// `CoreError::NotFound` when no healthcare service has `id`.
    pub fn service(&self, id: &str) -> CoreResult<HealthcareService> {
        self.store
            .healthcare_services
            .get(id)
            .ok_or_else(|| CoreError::NotFound("Healthcare Service not found".into()))
    }
}

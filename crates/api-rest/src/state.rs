use dohac_core::{
    AttendanceService, AuthService, CoreConfig, CoreResult, ProviderService, QualityService,
    Store,
};
use std::sync::Arc;

/// Application state for the REST API server.
///
/// Holds one instance of every service; all of them share the same configuration and store.
#[derive(Clone, Debug)]
pub struct AppState {
    pub auth: AuthService,
    pub providers: ProviderService,
    pub quality: QualityService,
    pub attendance: AttendanceService,
}

impl AppState {
    pub fn new(cfg: CoreConfig, store: Store) -> Self {
        let cfg = Arc::new(cfg);
        let store = Arc::new(store);
        Self {
            auth: AuthService::new(cfg.clone()),
            providers: ProviderService::new(store.clone()),
            quality: QualityService::new(store.clone()),
            attendance: AttendanceService::new(cfg, store),
        }
    }
}

/// Resolves the core configuration from `DOHAC_BASE_URL`, `DOHAC_REGISTRATION_URL` and
/// `DOHAC_ATTENDANCE_PATCH_POLICY`.
///
/// Called once at startup by the binaries; nothing reads these variables afterwards.
pub fn core_config_from_env() -> CoreResult<CoreConfig> {
    CoreConfig::from_env_values(
        std::env::var("DOHAC_BASE_URL").ok(),
        std::env::var("DOHAC_REGISTRATION_URL").ok(),
        std::env::var("DOHAC_ATTENDANCE_PATCH_POLICY").ok(),
    )
}

//! Shared application state injected into handlers.

use crate::application::services::UniversalSslService;
use crate::domain::clients::ZoneSettingsClient;
use crate::web::Locale;
use std::sync::Arc;

/// Immutable per-process state. Cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub ssl_service: Arc<UniversalSslService<dyn ZoneSettingsClient>>,
    pub locale: Locale,
}

impl AppState {
    pub fn new(
        ssl_service: Arc<UniversalSslService<dyn ZoneSettingsClient>>,
        locale: Locale,
    ) -> Self {
        Self {
            ssl_service,
            locale,
        }
    }
}

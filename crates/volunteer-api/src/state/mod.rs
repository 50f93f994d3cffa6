//! Shared handler state: the service context plus the loaded configuration

use std::sync::Arc;

use volunteer_common::AppConfig;
use volunteer_service::ServiceContext;

#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
        }
    }

    /// Stores and token issuer every service is built from
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &self.service_context)
            .field("storage", &self.config.storage.backend)
            .finish()
    }
}

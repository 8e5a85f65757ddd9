use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::api::router::AppState;
use crate::application::{
    ports::{BlobGateway, StorageError},
    use_cases::{ListVideosUseCase, UploadVideoUseCase},
};
use crate::config::Config;
use crate::infrastructure::azure::AzureBlobGateway;

/// Application builder for clean dependency injection and setup
pub struct ApplicationBuilder {
    config: Config,
    gateway: Option<Arc<dyn BlobGateway>>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            gateway: None,
        }
    }

    /// Create the Azure gateway from the configured connection string.
    /// Without one the service still starts, but the video routes report
    /// that storage is not configured.
    pub fn with_infrastructure(mut self) -> Result<Self, StorageError> {
        let Some(connection_string) = self.config.storage_connection_string.as_deref() else {
            warn!("AZURE_STORAGE_CONNECTION_STRING not set; video routes will return 500");
            return Ok(self);
        };

        let gateway = AzureBlobGateway::from_connection_string(
            connection_string,
            Duration::from_secs(self.config.storage_request_timeout_secs),
        )
        .map_err(|e| {
            tracing::error!("Invalid storage connection string: {}", e);
            e
        })?;

        info!(
            account = gateway.account(),
            container = %self.config.container_name,
            "Infrastructure layer initialized"
        );

        self.gateway = Some(Arc::new(gateway));
        Ok(self)
    }

    /// Use an already constructed gateway
    pub fn with_gateway(mut self, gateway: Arc<dyn BlobGateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    /// Build application state with all use cases
    pub fn build(self) -> AppState {
        let Some(gateway) = self.gateway else {
            return AppState::default();
        };

        let container = self.config.container_name;
        let upload_use_case = Arc::new(UploadVideoUseCase::new(
            Arc::clone(&gateway),
            container.clone(),
        ));
        let list_use_case = Arc::new(ListVideosUseCase::new(gateway, container));

        info!("Application layer initialized");

        AppState {
            upload_use_case: Some(upload_use_case),
            list_use_case: Some(list_use_case),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

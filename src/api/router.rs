use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{health_handler, list_handler, upload_handler};
use crate::api::middleware::request_logging;
use crate::api::openapi::swagger_ui;
use crate::application::use_cases::{ListVideosUseCase, UploadVideoUseCase};

/// Application state container.
/// Use cases are absent when no storage connection string was configured.
#[derive(Clone, Default)]
pub struct AppState {
    pub upload_use_case: Option<Arc<UploadVideoUseCase>>,
    pub list_use_case: Option<Arc<ListVideosUseCase>>,
}

impl AppState {
    pub fn storage_configured(&self) -> bool {
        self.upload_use_case.is_some() && self.list_use_case.is_some()
    }
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let storage_configured = state.storage_configured();

    Router::new()
        .route(
            "/health",
            get(health_handler).with_state(storage_configured),
        )
        .route(
            "/api/list-videos",
            get(list_handler).with_state(state.list_use_case),
        )
        // Size is enforced while streaming the field
        .route(
            "/api/upload-video",
            post(upload_handler)
                .with_state(state.upload_use_case)
                .layer(DefaultBodyLimit::disable()),
        )
        .merge(swagger_ui())
        .layer(axum_middleware::from_fn(
            request_logging::request_logging_middleware,
        ))
}

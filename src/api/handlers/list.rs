use axum::{extract::State, response::Json};
use std::sync::Arc;
use tracing::error;

use crate::api::errors::ApiError;
use crate::application::dto::ListVideosResponse;
use crate::application::use_cases::ListVideosUseCase;

/// GET /api/list-videos
/// List uploaded videos, newest first
#[utoipa::path(
    get,
    path = "/api/list-videos",
    tag = "videos",
    responses(
        (status = 200, description = "Videos retrieved successfully", body = ListVideosResponse),
        (status = 500, description = "Storage not configured or listing failed", body = crate::api::errors::ErrorResponse)
    )
)]
pub async fn list_handler(
    State(use_case): State<Option<Arc<ListVideosUseCase>>>,
) -> Result<Json<ListVideosResponse>, ApiError> {
    let use_case = use_case.ok_or_else(|| {
        error!("Azure Storage connection string not configured");
        ApiError::storage_not_configured()
    })?;

    let videos = use_case.execute().await.map_err(|e| {
        error!(error = %e, "List videos error");
        ApiError::from(e)
    })?;

    Ok(Json(ListVideosResponse::new(videos)))
}

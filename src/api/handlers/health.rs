use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::json;
use utoipa::ToSchema;

/// Basic health check response
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
    /// "configured" or "not_configured"
    pub storage: String,
}

/// GET /health
/// Liveness check; reports whether storage credentials are present
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_handler(
    State(storage_configured): State<bool>,
) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "storage": if storage_configured { "configured" } else { "not_configured" },
        })),
    )
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::errors::{ListError, UploadError};
use crate::domain::errors::ValidationError;

/// JSON body of every failed request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Short summary, e.g. "Invalid file type"
    pub error: String,
    /// Human-readable explanation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// API error response
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: String,
    details: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error)
    }

    pub fn internal_error(error: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, error)
    }

    /// No storage connection string was configured
    pub fn storage_not_configured() -> Self {
        Self::internal_error("Storage not configured")
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            success: false,
            error: self.error,
            details: self.details,
        });

        (self.status, body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::bad_request(err.to_string()).with_details(err.details())
    }
}

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::Validation(e) => e.into(),
            UploadError::Storage(e) => {
                ApiError::internal_error("Upload failed").with_details(e.to_string())
            }
        }
    }
}

impl From<ListError> for ApiError {
    fn from(err: ListError) -> Self {
        match err {
            ListError::Storage(e) => {
                ApiError::internal_error("Failed to list videos").with_details(e.to_string())
            }
        }
    }
}

use axum::{
    extract::{
        multipart::{Field, MultipartError, MultipartRejection},
        Multipart, State,
    },
    response::Json,
};
use bytes::{Bytes, BytesMut};
use std::sync::Arc;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::errors::ApiError;
use crate::application::dto::{UploadCommand, UploadVideoResponse};
use crate::application::errors::UploadError;
use crate::application::use_cases::UploadVideoUseCase;
use crate::domain::errors::ValidationError;
use crate::domain::validation::{UploadValidator, MAX_UPLOAD_BYTES};

/// Multipart field carrying the video
pub const VIDEO_FIELD: &str = "video";

/// Multipart form accepted by the upload endpoint
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadVideoForm {
    /// MP4, WebM, OGG or QuickTime file, at most 500 MiB
    #[schema(value_type = String, format = Binary)]
    video: Vec<u8>,
}

/// POST /api/upload-video
/// Upload a video from the `video` field of a multipart form
#[utoipa::path(
    post,
    path = "/api/upload-video",
    tag = "videos",
    request_body(content = UploadVideoForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Video uploaded successfully", body = UploadVideoResponse),
        (status = 400, description = "Missing file, invalid type, file too large or malformed form", body = crate::api::errors::ErrorResponse),
        (status = 500, description = "Storage not configured or upload failed", body = crate::api::errors::ErrorResponse)
    )
)]
pub async fn upload_handler(
    State(use_case): State<Option<Arc<UploadVideoUseCase>>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadVideoResponse>, ApiError> {
    let use_case = use_case.ok_or_else(|| {
        error!("Azure Storage connection string not configured");
        ApiError::storage_not_configured()
            .with_details("Azure Storage connection string is missing")
    })?;

    let multipart = multipart.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected upload form");
        ApiError::bad_request("Invalid form data").with_details(rejection.body_text())
    })?;

    let command = read_video_field(multipart).await.map_err(|e| {
        warn!(error = %e.error(), details = ?e.details(), "Rejected upload");
        e
    })?;

    let uploaded = use_case.execute(command).await.map_err(|e| {
        match &e {
            UploadError::Validation(v) => warn!(error = %v, details = %v.details(), "Rejected upload"),
            UploadError::Storage(s) => error!(error = %s, "Upload error"),
        }
        ApiError::from(e)
    })?;

    Ok(Json(UploadVideoResponse::from(uploaded)))
}

/// Find the video field and read it.
/// The content type is checked before any payload bytes are read.
async fn read_video_field(mut multipart: Multipart) -> Result<UploadCommand, ApiError> {
    while let Some(mut field) = multipart.next_field().await.map_err(invalid_form)? {
        if field.name() != Some(VIDEO_FIELD) {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        UploadValidator::validate_content_type(&content_type)?;

        let file_name = field.file_name().unwrap_or(VIDEO_FIELD).to_string();
        let data = read_capped(&mut field).await?;

        return Ok(UploadCommand {
            file_name,
            content_type,
            data,
        });
    }

    Err(ValidationError::NoFile.into())
}

/// Buffer the field up to [`MAX_UPLOAD_BYTES`]; anything beyond is counted
/// so the rejection can report the real size, but never kept in memory.
async fn read_capped(field: &mut Field<'_>) -> Result<Bytes, ApiError> {
    let mut buffer = BytesMut::new();
    let mut total: u64 = 0;

    while let Some(chunk) = field.chunk().await.map_err(invalid_form)? {
        total += chunk.len() as u64;
        if total > MAX_UPLOAD_BYTES {
            buffer = BytesMut::new();
            continue;
        }
        buffer.extend_from_slice(&chunk);
    }

    UploadValidator::validate_size(total)?;
    Ok(buffer.freeze())
}

fn invalid_form(err: MultipartError) -> ApiError {
    ApiError::bad_request("Invalid form data").with_details(err.body_text())
}

//! Upload validation rules
//!
//! Both checks are pure and run before any storage call, so a rejected
//! upload never touches the network.

use crate::domain::errors::ValidationError;
use crate::domain::value_objects::VideoContentType;

/// Upload size ceiling: 500 MiB
pub const MAX_UPLOAD_BYTES: u64 = 500 * 1024 * 1024;

/// Validation result type
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Allow-list and size checks for incoming videos
pub struct UploadValidator;

impl UploadValidator {
    /// Validate a declared content type and payload length together
    pub fn validate(content_type: &str, size: u64) -> ValidationResult<VideoContentType> {
        let video_type = Self::validate_content_type(content_type)?;
        Self::validate_size(size)?;
        Ok(video_type)
    }

    /// Validate that the declared content type is an allowed video format
    pub fn validate_content_type(content_type: &str) -> ValidationResult<VideoContentType> {
        content_type
            .parse::<VideoContentType>()
            .map_err(|_| ValidationError::InvalidType {
                content_type: content_type.to_string(),
            })
    }

    /// Validate that the payload does not exceed [`MAX_UPLOAD_BYTES`]
    pub fn validate_size(size: u64) -> ValidationResult<()> {
        if size > MAX_UPLOAD_BYTES {
            return Err(ValidationError::too_large(size));
        }
        Ok(())
    }
}

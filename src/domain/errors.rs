use thiserror::Error;

use super::validation::MAX_UPLOAD_BYTES;

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Reasons an upload is rejected before any storage call is made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("No file provided")]
    NoFile,

    #[error("Invalid file type")]
    InvalidType { content_type: String },

    #[error("File too large")]
    TooLarge { size: u64, max: u64 },
}

impl ValidationError {
    /// Human-readable explanation shown next to the error summary
    pub fn details(&self) -> String {
        match self {
            ValidationError::NoFile => "Please select a video file to upload".to_string(),
            ValidationError::InvalidType { content_type } => format!(
                "Allowed types: MP4, WebM, OGG, MOV. Received: {}",
                content_type
            ),
            ValidationError::TooLarge { size, max } => format!(
                "Maximum file size is {}MB. Your file is {:.2}MB",
                max / (1024 * 1024),
                *size as f64 / BYTES_PER_MIB
            ),
        }
    }

    pub fn too_large(size: u64) -> Self {
        ValidationError::TooLarge {
            size,
            max: MAX_UPLOAD_BYTES,
        }
    }
}

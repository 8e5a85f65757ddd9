//! Use-case error types
//!
//! The API layer maps each variant onto an HTTP status.

use thiserror::Error;

use crate::application::ports::StorageError;
use crate::domain::errors::ValidationError;

/// Error type for the upload use case
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Error type for the list use case
#[derive(Debug, Error)]
pub enum ListError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage configuration error: {0}")]
    Configuration(String),

    #[error("Storage request failed: {0}")]
    Transport(String),

    #[error("Storage service returned HTTP {status} during {operation}: {message}")]
    Service {
        operation: &'static str,
        status: u16,
        message: String,
    },

    #[error("Invalid storage response: {0}")]
    InvalidResponse(String),
}

/// An object as reported by the storage backend's listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub name: String,
    pub url: String,
    pub size_bytes: u64,
    pub created_on: Option<DateTime<Utc>>,
}

/// Port for the external object store holding the videos
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BlobGateway: Send + Sync {
    /// Create the container with public blob read access unless it exists.
    /// Safe to call before every upload.
    async fn ensure_container(&self, container: &str) -> Result<(), StorageError>;

    /// Upload a payload in one shot and return its public URL
    async fn put_object(
        &self,
        container: &str,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> Result<String, StorageError>;

    /// List every object in the container.
    /// A container that does not exist yields an empty list.
    async fn list_objects(&self, container: &str) -> Result<Vec<StoredObject>, StorageError>;
}

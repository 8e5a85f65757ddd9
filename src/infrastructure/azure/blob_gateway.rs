use async_trait::async_trait;
use azure_core::error::ErrorKind;
use azure_core::RetryOptions;
use azure_storage_blobs::prelude::*;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use futures_util::StreamExt;
use std::future::{Future, IntoFuture};
use std::time::Duration;
use tracing::{debug, info};

use crate::application::ports::{BlobGateway, StorageError, StoredObject};

use super::connection::AzureConnection;

const CONFLICT: u16 = 409;
const NOT_FOUND: u16 = 404;

/// Gateway that forwards operations to an Azure Blob Storage account
pub struct AzureBlobGateway {
    service: BlobServiceClient,
    account: String,
    timeout: Duration,
}

impl AzureBlobGateway {
    /// Failures surface to the caller unchanged, so the client's retry
    /// policy is switched off.
    pub fn new(connection: AzureConnection, timeout: Duration) -> Self {
        let (account, location, credentials) = connection.into_parts();
        let service = ClientBuilder::with_location(location, credentials)
            .retry(RetryOptions::none())
            .blob_service_client();

        info!(account = %account, "Initialized Azure Blob storage");

        Self {
            service,
            account,
            timeout,
        }
    }

    pub fn from_connection_string(
        connection_string: &str,
        timeout: Duration,
    ) -> Result<Self, StorageError> {
        Ok(Self::new(AzureConnection::parse(connection_string)?, timeout))
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    /// Public address of a blob, without any SAS credentials
    pub fn blob_url(&self, container: &str, key: &str) -> Result<String, StorageError> {
        self.service
            .container_client(container)
            .blob_client(key)
            .url()
            .map(|url| url.to_string())
            .map_err(|e| StorageError::Configuration(e.to_string()))
    }

    /// Bound a client call by the configured request timeout
    async fn timed<T, F>(&self, operation: &'static str, call: F) -> Result<T, StorageError>
    where
        F: Future<Output = T>,
    {
        tokio::time::timeout(self.timeout, call).await.map_err(|_| {
            StorageError::Transport(format!(
                "{} timed out after {}s",
                operation,
                self.timeout.as_secs()
            ))
        })
    }
}

/// HTTP status and service error code of a failed call, if it got a response
fn http_failure(err: &azure_core::Error) -> Option<(u16, Option<&str>)> {
    match err.kind() {
        ErrorKind::HttpResponse { status, error_code } => {
            Some((*status as u16, error_code.as_deref()))
        }
        _ => None,
    }
}

fn storage_error(operation: &'static str, err: azure_core::Error) -> StorageError {
    match http_failure(&err) {
        Some((status, code)) => StorageError::Service {
            operation,
            status,
            message: code.map(str::to_string).unwrap_or_else(|| err.to_string()),
        },
        None => match err.kind() {
            ErrorKind::DataConversion => StorageError::InvalidResponse(err.to_string()),
            _ => StorageError::Transport(err.to_string()),
        },
    }
}

fn to_utc(time: time::OffsetDateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(time.unix_timestamp(), time.nanosecond())
}

#[async_trait]
impl BlobGateway for AzureBlobGateway {
    async fn ensure_container(&self, container: &str) -> Result<(), StorageError> {
        let container_client = self.service.container_client(container);

        debug!(container = %container, "Azure create container");

        let created = self
            .timed(
                "create container",
                container_client
                    .create()
                    .public_access(PublicAccess::Blob)
                    .into_future(),
            )
            .await?;

        match created {
            Ok(_) => {
                info!(container = %container, "Created container with public blob access");
                Ok(())
            }
            Err(e) => {
                // 409 also covers PublicAccessNotPermitted, which is a real failure
                let exists = matches!(
                    http_failure(&e),
                    Some((CONFLICT, None | Some("ContainerAlreadyExists")))
                );
                if exists {
                    debug!(container = %container, "Container already exists");
                    Ok(())
                } else {
                    Err(storage_error("create container", e))
                }
            }
        }
    }

    async fn put_object(
        &self,
        container: &str,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let blob_client = self.service.container_client(container).blob_client(key);
        let url = blob_client
            .url()
            .map_err(|e| StorageError::Configuration(e.to_string()))?;
        let size = data.len();

        self.timed(
            "put blob",
            blob_client
                .put_block_blob(data)
                .content_type(content_type.to_string())
                .into_future(),
        )
        .await?
        .map_err(|e| storage_error("put blob", e))?;

        debug!(
            container = %container,
            blob = %key,
            size_bytes = size,
            "Uploaded to Azure Blob"
        );

        Ok(url.to_string())
    }

    async fn list_objects(&self, container: &str) -> Result<Vec<StoredObject>, StorageError> {
        let container_client = self.service.container_client(container);
        let mut stream = container_client.list_blobs().into_stream();
        let mut objects = Vec::new();

        while let Some(page) = self.timed("list blobs", stream.next()).await? {
            let page = match page {
                Ok(page) => page,
                Err(e) if matches!(http_failure(&e), Some((NOT_FOUND, _))) => {
                    debug!(container = %container, "Container does not exist");
                    return Ok(objects);
                }
                Err(e) => return Err(storage_error("list blobs", e)),
            };

            for blob in page.blobs.blobs() {
                let url = container_client
                    .blob_client(&blob.name)
                    .url()
                    .map_err(|e| StorageError::InvalidResponse(e.to_string()))?;

                objects.push(StoredObject {
                    name: blob.name.clone(),
                    url: url.to_string(),
                    size_bytes: blob.properties.content_length,
                    created_on: to_utc(blob.properties.creation_time),
                });
            }
        }

        Ok(objects)
    }
}

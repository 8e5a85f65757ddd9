//! Azure Blob Storage adapter for the [`BlobGateway`] port.
//!
//! Built on the `azure_storage_blobs` client:
//!   `ensure_container()` -> `ContainerClient::create()` with public blob access
//!   `put_object()`       -> `BlobClient::put_block_blob()`
//!   `list_objects()`     -> `ContainerClient::list_blobs()` stream
//!
//! [`BlobGateway`]: crate::application::ports::BlobGateway

mod blob_gateway;
mod connection;

pub use blob_gateway::AzureBlobGateway;
pub use connection::AzureConnection;

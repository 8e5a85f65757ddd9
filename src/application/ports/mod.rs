mod blob_gateway;

pub use blob_gateway::{BlobGateway, StorageError, StoredObject};

#[cfg(test)]
pub use blob_gateway::MockBlobGateway;

use azure_storage::{CloudLocation, ConnectionString, StorageCredentials};

use crate::application::ports::StorageError;

/// Account used by the Azurite emulator
pub const EMULATOR_ACCOUNT: &str = "devstoreaccount1";
const EMULATOR_ADDRESS: &str = "127.0.0.1";
const EMULATOR_BLOB_PORT: u16 = 10000;

const PUBLIC_ENDPOINT_SUFFIX: &str = "core.windows.net";

/// Where the blob service lives and how to authorize against it,
/// resolved from a storage connection string
pub struct AzureConnection {
    account: String,
    location: CloudLocation,
    credentials: StorageCredentials,
}

impl AzureConnection {
    /// Resolve a connection string.
    ///
    /// `UseDevelopmentStorage=true` targets the local emulator, `BlobEndpoint`
    /// overrides the account endpoint, and a non-public `EndpointSuffix` is
    /// honored. Credentials (account key or SAS) come from the client library.
    pub fn parse(connection_string: &str) -> Result<Self, StorageError> {
        let parsed = ConnectionString::new(connection_string)
            .map_err(|e| configuration_error("invalid connection string", e))?;

        if parsed.use_development_storage == Some(true) {
            return Ok(Self::emulator());
        }

        let account = parsed
            .account_name
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                StorageError::Configuration("connection string has no AccountName".to_string())
            })?
            .to_string();

        let credentials = parsed
            .storage_credentials()
            .map_err(|e| configuration_error("connection string has no usable credential", e))?;

        let location = match (parsed.blob_endpoint, parsed.endpoint_suffix) {
            (Some(endpoint), _) => CloudLocation::Custom {
                account: account.clone(),
                uri: endpoint.trim_end_matches('/').to_string(),
            },
            (None, Some(suffix)) if suffix != PUBLIC_ENDPOINT_SUFFIX => CloudLocation::Custom {
                account: account.clone(),
                uri: format!("https://{}.blob.{}", account, suffix),
            },
            _ => CloudLocation::Public {
                account: account.clone(),
            },
        };

        Ok(Self {
            account,
            location,
            credentials,
        })
    }

    /// Local Azurite emulator with its well-known account
    pub fn emulator() -> Self {
        Self {
            account: EMULATOR_ACCOUNT.to_string(),
            location: CloudLocation::Emulator {
                address: EMULATOR_ADDRESS.to_string(),
                port: EMULATOR_BLOB_PORT,
            },
            credentials: StorageCredentials::emulator(),
        }
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub(crate) fn into_parts(self) -> (String, CloudLocation, StorageCredentials) {
        (self.account, self.location, self.credentials)
    }
}

/// The client library's message is kept out so keys never reach the logs
fn configuration_error(context: &str, _source: azure_core::Error) -> StorageError {
    StorageError::Configuration(context.to_string())
}

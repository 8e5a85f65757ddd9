use std::sync::Arc;
use tracing::info;

use crate::application::dto::{UploadCommand, UploadedVideo};
use crate::application::errors::UploadError;
use crate::application::ports::BlobGateway;
use crate::domain::validation::UploadValidator;
use crate::domain::value_objects::BlobName;

/// Use case: Upload a video
pub struct UploadVideoUseCase {
    gateway: Arc<dyn BlobGateway>,
    container: String,
}

impl UploadVideoUseCase {
    pub fn new(gateway: Arc<dyn BlobGateway>, container: impl Into<String>) -> Self {
        Self {
            gateway,
            container: container.into(),
        }
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    /// Execute upload workflow
    pub async fn execute(&self, command: UploadCommand) -> Result<UploadedVideo, UploadError> {
        let size = command.data.len() as u64;

        // 1. Validate before touching storage
        UploadValidator::validate(&command.content_type, size)?;

        // 2. Make sure the container exists (public blob access)
        self.gateway.ensure_container(&self.container).await?;

        // 3. Timestamp-prefixed key keeps names unique
        let blob_name = BlobName::generate(&command.file_name);

        // 4. Single-shot upload with the declared content type
        let url = self
            .gateway
            .put_object(
                &self.container,
                blob_name.as_str(),
                command.data,
                command.content_type.trim(),
            )
            .await?;

        info!(
            container = %self.container,
            blob_name = %blob_name,
            size_bytes = size,
            "Successfully uploaded video"
        );

        Ok(UploadedVideo {
            blob_name: blob_name.into_inner(),
            size,
            url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockBlobGateway, StorageError};
    use crate::domain::errors::ValidationError;
    use bytes::Bytes;
    use mockall::Sequence;
    use regex::Regex;

    fn command(file_name: &str, content_type: &str, data: &'static [u8]) -> UploadCommand {
        UploadCommand {
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            data: Bytes::from_static(data),
        }
    }

    #[tokio::test]
    async fn test_upload_video_happy_path() {
        // Arrange
        let mut mock_gateway = MockBlobGateway::new();
        let mut seq = Sequence::new();

        mock_gateway
            .expect_ensure_container()
            .withf(|container| container == "videos")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        mock_gateway
            .expect_put_object()
            .withf(|container, key, data, content_type| {
                container == "videos"
                    && key.ends_with("-my_clip.mp4")
                    && &data[..] == b"fake video"
                    && content_type == "video/mp4"
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|container, key, _, _| {
                Ok(format!("https://acct.blob.core.windows.net/{}/{}", container, key))
            });

        let use_case = UploadVideoUseCase::new(Arc::new(mock_gateway), "videos");

        // Act
        let result = use_case
            .execute(command("my clip.mp4", "video/mp4", b"fake video"))
            .await;

        // Assert
        let uploaded = result.unwrap();
        assert!(Regex::new(r"^\d+-my_clip\.mp4$")
            .unwrap()
            .is_match(&uploaded.blob_name));
        assert_eq!(uploaded.size, 10);
        assert!(uploaded.url.ends_with(&uploaded.blob_name));
    }

    #[tokio::test]
    async fn test_upload_rejects_invalid_type_without_storage_calls() {
        let mut mock_gateway = MockBlobGateway::new();
        mock_gateway.expect_ensure_container().never();
        mock_gateway.expect_put_object().never();

        let use_case = UploadVideoUseCase::new(Arc::new(mock_gateway), "videos");

        let result = use_case
            .execute(command("cat.png", "image/png", b"png"))
            .await;

        assert!(matches!(
            result,
            Err(UploadError::Validation(ValidationError::InvalidType { .. }))
        ));
    }

    #[tokio::test]
    async fn test_upload_propagates_ensure_container_failure() {
        let mut mock_gateway = MockBlobGateway::new();
        mock_gateway
            .expect_ensure_container()
            .times(1)
            .returning(|_| Err(StorageError::Transport("dns error".to_string())));
        mock_gateway.expect_put_object().never();

        let use_case = UploadVideoUseCase::new(Arc::new(mock_gateway), "videos");

        let result = use_case
            .execute(command("a.webm", "video/webm", b"data"))
            .await;

        assert!(matches!(result, Err(UploadError::Storage(_))));
    }

    #[tokio::test]
    async fn test_upload_propagates_put_failure() {
        let mut mock_gateway = MockBlobGateway::new();
        mock_gateway
            .expect_ensure_container()
            .returning(|_| Ok(()));
        mock_gateway.expect_put_object().times(1).returning(|_, _, _, _| {
            Err(StorageError::Service {
                operation: "put blob",
                status: 500,
                message: "InternalError".to_string(),
            })
        });

        let use_case = UploadVideoUseCase::new(Arc::new(mock_gateway), "videos");

        let result = use_case
            .execute(command("a.mov", "video/quicktime", b"data"))
            .await;

        assert!(matches!(result, Err(UploadError::Storage(_))));
    }
}

use std::sync::Arc;
use tracing::debug;

use crate::application::dto::VideoItem;
use crate::application::errors::ListError;
use crate::application::ports::BlobGateway;

/// Use case: List uploaded videos, newest first
pub struct ListVideosUseCase {
    gateway: Arc<dyn BlobGateway>,
    container: String,
}

impl ListVideosUseCase {
    pub fn new(gateway: Arc<dyn BlobGateway>, container: impl Into<String>) -> Self {
        Self {
            gateway,
            container: container.into(),
        }
    }

    /// Execute list.
    /// Objects without a creation time sort after every dated object.
    pub async fn execute(&self) -> Result<Vec<VideoItem>, ListError> {
        let mut objects = self.gateway.list_objects(&self.container).await?;

        objects.sort_by(|a, b| b.created_on.cmp(&a.created_on));

        debug!(
            container = %self.container,
            count = objects.len(),
            "Listed videos"
        );

        Ok(objects.into_iter().map(VideoItem::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockBlobGateway, StorageError, StoredObject};
    use chrono::{Duration, TimeZone, Utc};

    fn stored(name: &str, created_on: Option<chrono::DateTime<Utc>>) -> StoredObject {
        StoredObject {
            name: name.to_string(),
            url: format!("https://acct.blob.core.windows.net/videos/{}", name),
            size_bytes: 1024,
            created_on,
        }
    }

    #[tokio::test]
    async fn test_list_videos_newest_first() {
        // Arrange
        let t1 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let t2 = t1 + Duration::hours(1);
        let t3 = t1 + Duration::days(3);

        let mut mock_gateway = MockBlobGateway::new();
        mock_gateway
            .expect_list_objects()
            .withf(|container| container == "videos")
            .times(1)
            .returning(move |_| {
                Ok(vec![
                    stored("old", Some(t1)),
                    stored("undated", None),
                    stored("newest", Some(t3)),
                    stored("middle", Some(t2)),
                ])
            });

        let use_case = ListVideosUseCase::new(Arc::new(mock_gateway), "videos");

        // Act
        let videos = use_case.execute().await.unwrap();

        // Assert
        let names: Vec<&str> = videos.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["newest", "middle", "old", "undated"]);
        assert_eq!(videos[0].created_on, "2024-01-04T00:00:00.000Z");
        assert_eq!(videos[3].created_on, "");
    }

    #[tokio::test]
    async fn test_list_videos_empty_container() {
        let mut mock_gateway = MockBlobGateway::new();
        mock_gateway
            .expect_list_objects()
            .times(1)
            .returning(|_| Ok(vec![]));

        let use_case = ListVideosUseCase::new(Arc::new(mock_gateway), "videos");

        let videos = use_case.execute().await.unwrap();

        assert!(videos.is_empty());
    }

    #[tokio::test]
    async fn test_list_videos_propagates_storage_error() {
        let mut mock_gateway = MockBlobGateway::new();
        mock_gateway
            .expect_list_objects()
            .returning(|_| Err(StorageError::Transport("timed out".to_string())));

        let use_case = ListVideosUseCase::new(Arc::new(mock_gateway), "videos");

        let result = use_case.execute().await;

        assert!(matches!(result, Err(ListError::Storage(_))));
    }
}

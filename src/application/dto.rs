use bytes::Bytes;
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::ports::StoredObject;

/// A video as returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    /// Storage key of the video
    pub name: String,
    /// Public URL of the video
    pub url: String,
    /// Size in bytes
    pub size: u64,
    /// Creation time (ISO-8601, UTC), empty when unknown
    pub created_on: String,
}

impl From<StoredObject> for VideoItem {
    fn from(obj: StoredObject) -> Self {
        Self {
            name: obj.name,
            url: obj.url,
            size: obj.size_bytes,
            created_on: obj
                .created_on
                .map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true))
                .unwrap_or_default(),
        }
    }
}

/// Upload input extracted from the multipart form
#[derive(Debug, Clone)]
pub struct UploadCommand {
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

/// Result of a successful upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedVideo {
    pub blob_name: String,
    pub size: u64,
    pub url: String,
}

/// DTO for list response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListVideosResponse {
    pub success: bool,
    pub videos: Vec<VideoItem>,
}

impl ListVideosResponse {
    pub fn new(videos: Vec<VideoItem>) -> Self {
        Self {
            success: true,
            videos,
        }
    }
}

/// DTO for upload response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadVideoResponse {
    pub success: bool,
    /// Storage key assigned to the upload
    pub blob_name: String,
    /// Uploaded size in bytes
    pub size: u64,
    /// Public URL of the uploaded video
    pub url: String,
}

impl From<UploadedVideo> for UploadVideoResponse {
    fn from(video: UploadedVideo) -> Self {
        Self {
            success: true,
            blob_name: video.blob_name,
            size: video.size,
            url: video.url,
        }
    }
}

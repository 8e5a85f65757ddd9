mod list_videos;
mod upload_video;

pub use crate::application::errors::{ListError, UploadError};
pub use list_videos::ListVideosUseCase;
pub use upload_video::UploadVideoUseCase;

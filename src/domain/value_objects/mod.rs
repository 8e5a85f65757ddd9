mod blob_name;
mod video_content_type;

pub use blob_name::{sanitize_filename, BlobName, MAX_FILENAME_LENGTH};
pub use video_content_type::VideoContentType;

use serde::{Deserialize, Serialize};

/// Video formats accepted for upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoContentType {
    #[serde(rename = "video/mp4")]
    Mp4,
    #[serde(rename = "video/webm")]
    WebM,
    #[serde(rename = "video/ogg")]
    Ogg,
    /// `.mov` files
    #[serde(rename = "video/quicktime")]
    QuickTime,
}

impl VideoContentType {
    pub const ALL: [VideoContentType; 4] = [
        VideoContentType::Mp4,
        VideoContentType::WebM,
        VideoContentType::Ogg,
        VideoContentType::QuickTime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VideoContentType::Mp4 => "video/mp4",
            VideoContentType::WebM => "video/webm",
            VideoContentType::Ogg => "video/ogg",
            VideoContentType::QuickTime => "video/quicktime",
        }
    }
}

impl std::fmt::Display for VideoContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for VideoContentType {
    type Err = String;

    /// Exact match, ignoring case and surrounding whitespace.
    /// Parameters such as `; codecs=...` are not accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "video/mp4" => Ok(VideoContentType::Mp4),
            "video/webm" => Ok(VideoContentType::WebM),
            "video/ogg" => Ok(VideoContentType::Ogg),
            "video/quicktime" => Ok(VideoContentType::QuickTime),
            _ => Err(format!("Invalid video content type: {}", s)),
        }
    }
}

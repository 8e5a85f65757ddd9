use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Longest sanitized filename kept in a blob name
pub const MAX_FILENAME_LENGTH: usize = 200;

static UNSAFE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9._-]").expect("Invalid unsafe-chars regex"));

static UNDERSCORE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_{2,}").expect("Invalid underscore-runs regex"));

/// Normalize a client-supplied filename into a safe storage key fragment.
///
/// Every character outside `[A-Za-z0-9._-]` becomes `_`, runs of underscores
/// collapse to one, and the result is cut to [`MAX_FILENAME_LENGTH`]
/// characters. Path separators are replaced too, so the result never
/// addresses anything outside the container root.
pub fn sanitize_filename(filename: &str) -> String {
    let replaced = UNSAFE_CHARS.replace_all(filename, "_");
    let collapsed = UNDERSCORE_RUNS.replace_all(&replaced, "_");

    // Only ASCII survives the replacement, so byte truncation is char-safe
    let mut result = collapsed.into_owned();
    result.truncate(MAX_FILENAME_LENGTH);
    result
}

/// Storage key of an uploaded video: `<unix-millis>-<sanitized-filename>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlobName(String);

impl BlobName {
    pub fn new(timestamp_millis: i64, filename: &str) -> Self {
        Self(format!("{}-{}", timestamp_millis, sanitize_filename(filename)))
    }

    /// Name the blob after the current wall-clock millisecond
    pub fn generate(filename: &str) -> Self {
        Self::new(Utc::now().timestamp_millis(), filename)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for BlobName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for BlobName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

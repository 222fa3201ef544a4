//! Error types for curlgen

use thiserror::Error;

/// Main error type for curlgen
///
/// Conversion pipelines never surface these: they degrade to error-comment
/// strings instead (see [`crate::convert`]). This type covers the binary's
/// own failure modes around input/output handling.
#[derive(Error, Debug)]
pub enum CurlgenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CurlgenError>;

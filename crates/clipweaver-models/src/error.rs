//! Error types for model operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while building model values.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Not a file: {0}")]
    NotAFile(PathBuf),

    #[error("Invalid response format: {0}")]
    InvalidResponseFormat(String),

    #[error("Malformed response body: {0}")]
    MalformedBody(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

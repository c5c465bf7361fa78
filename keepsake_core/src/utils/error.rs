//! Centralized error handling for Keepsake.
//!
//! Library code returns the typed [`KeepsakeError`]; the binaries wrap it
//! in `anyhow` at their initialization seams.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeepsakeError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type KeepsakeResult<T> = Result<T, KeepsakeError>;

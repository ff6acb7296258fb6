//! Input loading error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a values or metadata document
#[derive(Debug, Error)]
pub enum LoadError {
    /// File could not be read
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File extension does not map to a known format
    #[error("Unsupported input format for '{0}' (expected .json, .yaml, .yml or .toml)")]
    UnsupportedFormat(PathBuf),

    /// JSON parse error
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parse error
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for loading operations
pub type LoadResult<T> = Result<T, LoadError>;

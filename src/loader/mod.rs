//! Reading values and metadata documents from disk
//!
//! Documents are parsed into `serde_json::Value` whatever their source format,
//! keeping key order as written.

use serde_json::Value;
use std::path::Path;

pub mod error;

pub use error::{LoadError, LoadResult};

/// Supported document formats
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
    Toml,
}

impl InputFormat {
    /// Determine format from the file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str())? {
            "json" => Some(InputFormat::Json),
            "yaml" | "yml" => Some(InputFormat::Yaml),
            "toml" => Some(InputFormat::Toml),
            _ => None,
        }
    }
}

/// Read and parse a document, choosing the parser from the file extension
pub fn load_tree(path: &Path) -> LoadResult<Value> {
    let format =
        InputFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Loaded {:?} document from {}", format, path.display());
    parse_tree(&content, format)
}

/// Like [`load_tree`], but a path that does not exist yields an empty tree
pub fn load_optional_tree(path: &Path) -> LoadResult<Value> {
    if !path.exists() {
        tracing::warn!("Metadata file {} does not exist, continuing without metadata", path.display());
        return Ok(Value::Object(Default::default()));
    }
    load_tree(path)
}

/// Parse document text in the given format
pub fn parse_tree(content: &str, format: InputFormat) -> LoadResult<Value> {
    let value = match format {
        InputFormat::Json => serde_json::from_str(content)?,
        InputFormat::Yaml => {
            // An empty YAML document is null; treat it as an empty tree
            if content.trim().is_empty() {
                Value::Object(Default::default())
            } else {
                serde_yaml::from_str(content)?
            }
        }
        InputFormat::Toml => toml::from_str(content)?,
    };
    Ok(value)
}

/// Parse YAML into JSON, handing back the input as a string when it is not
/// valid YAML
pub fn try_yaml_to_json(input: &str) -> Value {
    match serde_yaml::from_str::<Value>(input) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("Input is not valid YAML, keeping it as a string: {}", e);
            Value::String(input.to_string())
        }
    }
}

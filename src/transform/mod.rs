//! Values + metadata → form groups
//!
//! Three stages, run once per call with no shared state:
//! 1. [`merger`] zips the metadata tree into the values tree
//! 2. [`walker`] walks the (merged or raw) tree depth-first, pre-order
//! 3. [`normalizer`] turns every leaf into a [`FormField`](crate::domain::FormField)

use serde_json::{Map, Value};
use tracing::{debug, warn};

pub mod merger;
pub mod normalizer;
pub mod quick_start;
pub mod walker;

pub use merger::merge;
pub use normalizer::{normalize, validate_label, LeafContext};
pub use quick_start::quick_start;
pub use walker::{flatten, LeafRule};

use crate::domain::{FormGroup, Node};

/// Caller-tunable defaults of the transform
#[derive(Clone, Debug, PartialEq)]
pub struct TransformOptions {
    /// Group name used when a group has neither a label nor a key (the root)
    pub default_group_name: String,
    /// Type tag added to fields whose metadata declares none
    pub default_field_type: Option<String>,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            default_group_name: String::new(),
            default_field_type: Some(normalizer::DEFAULT_FIELD_TYPE.to_string()),
        }
    }
}

/// Merge `values` with `metadata` and flatten the result into form groups.
///
/// Empty metadata (`{}` or `null`) falls back to [`flatten_values`].
pub fn transform(values: &Value, metadata: &Value) -> Vec<FormGroup> {
    transform_with(values, metadata, &TransformOptions::default())
}

/// [`transform`] with explicit options
pub fn transform_with(values: &Value, metadata: &Value, options: &TransformOptions) -> Vec<FormGroup> {
    let Some(metadata) = metadata_map(metadata) else {
        return flatten_values_with(values, options);
    };

    let merged = merge(Node::from_value(values.clone()), metadata);
    let groups = flatten(&merged, LeafRule::Merged, options);
    debug!("Transformed values with metadata into {} form groups", groups.len());
    groups
}

/// Flatten a values tree that has no metadata
pub fn flatten_values(values: &Value) -> Vec<FormGroup> {
    flatten_values_with(values, &TransformOptions::default())
}

/// [`flatten_values`] with explicit options
pub fn flatten_values_with(values: &Value, options: &TransformOptions) -> Vec<FormGroup> {
    let tree = Node::from_value(values.clone());
    let groups = flatten(&tree, LeafRule::Relaxed, options);
    debug!("Flattened values without metadata into {} form groups", groups.len());
    groups
}

fn metadata_map(metadata: &Value) -> Option<&Map<String, Value>> {
    match metadata {
        Value::Object(map) if !map.is_empty() => Some(map),
        Value::Object(_) | Value::Null => None,
        other => {
            warn!("Metadata root is not an object ({}); ignoring it", other);
            None
        }
    }
}

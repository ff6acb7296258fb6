//! Form records handed to the rendering layer

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized description of a single form input
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    /// Dot path of the value (e.g. "image.tag")
    pub id: String,
    /// Value to prefill; null is canonicalized to ""
    pub initial_value: Value,
    pub description: String,
    /// Set from the metadata `immutable` flag
    pub disabled: bool,
    pub label: String,
    pub options: Vec<Value>,
    pub hidden: bool,
    /// Validation pattern, "" when none
    pub regex: String,
    /// Ordered validation tags, each at most once
    pub validation_type: Vec<String>,
}

impl FormField {
    pub fn is_required(&self) -> bool {
        self.validation_type.iter().any(|tag| tag == "required")
    }
}

/// Fields sharing the same containing object
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormGroup {
    /// Dot path of the containing object, "" at the root
    pub id: String,
    pub group_name: String,
    pub description: String,
    /// Direct leaf children of the containing object, in key order
    pub form_data: Vec<FormField>,
}

//! Tagged tree built once from a JSON document
//!
//! Every node is classified when the tree is built, so later stages match on
//! the variant instead of probing the shape of raw JSON values.

use serde_json::{Map, Value};

use super::metadata::FieldMetadata;

// ============================================================================
// Nodes
// ============================================================================

/// A node of a values tree (or of a merged tree)
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// null, boolean, number or string
    Scalar(Value),
    /// Array value; its items are never traversed
    Array(Vec<Value>),
    /// Nested mapping
    Object(ObjectNode),
    /// Values leaf that collided with a metadata object during merge
    Decorated(DecoratedLeaf),
}

/// Mapping node, entries kept in document order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectNode {
    pub entries: Vec<(String, Node)>,
    /// Group-level annotation (label, description) taken from metadata
    pub annotation: Option<FieldMetadata>,
}

/// A values leaf together with the metadata that decorates it
#[derive(Clone, Debug, PartialEq)]
pub struct DecoratedLeaf {
    /// Value found in the values tree
    pub value: Value,
    pub metadata: FieldMetadata,
}

impl DecoratedLeaf {
    /// Value shown in the form: an explicit metadata `initialValue` wins over
    /// the values-side value
    pub fn effective_value(&self) -> &Value {
        self.metadata.initial_value.as_ref().unwrap_or(&self.value)
    }
}

impl ObjectNode {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, node)| node)
    }

    fn from_map(map: Map<String, Value>) -> Self {
        Self {
            entries: map.into_iter().map(|(k, v)| (k, Node::from_value(v))).collect(),
            annotation: None,
        }
    }
}

impl Node {
    /// Classify a JSON value, recursing into objects
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Node::Object(ObjectNode::from_map(map)),
            Value::Array(items) => Node::Array(items),
            scalar => Node::Scalar(scalar),
        }
    }

    /// Get the node kind as a string
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Scalar(_) => "scalar",
            Node::Array(_) => "array",
            Node::Object(_) => "object",
            Node::Decorated(_) => "decorated",
        }
    }

    pub fn as_object(&self) -> Option<&ObjectNode> {
        match self {
            Node::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Convert back to a JSON value. Decorated leaves yield their effective
    /// value; annotations are not part of the value.
    pub fn to_value(&self) -> Value {
        match self {
            Node::Scalar(value) => value.clone(),
            Node::Array(items) => Value::Array(items.clone()),
            Node::Object(obj) => Value::Object(
                obj.entries
                    .iter()
                    .map(|(k, node)| (k.clone(), node.to_value()))
                    .collect(),
            ),
            Node::Decorated(leaf) => leaf.effective_value().clone(),
        }
    }
}

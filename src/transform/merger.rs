//! Merge of a values tree with its metadata tree
//!
//! The values tree is the source of truth: every values key survives with its
//! value, metadata keys that have no counterpart in values are dropped. The
//! merge is a structural zip with an explicit case split:
//!
//! | values   | metadata   | result                               |
//! |----------|------------|--------------------------------------|
//! | object   | object     | recurse per values key, keep annotation |
//! | leaf     | object     | [`DecoratedLeaf`]                    |
//! | any      | other/none | values node unchanged                |

use serde_json::{Map, Value};
use std::collections::HashSet;
use tracing::debug;

use crate::domain::{DecoratedLeaf, FieldMetadata, Node, ObjectNode};

/// Merge metadata into a values tree
pub fn merge(values: Node, metadata: &Map<String, Value>) -> Node {
    let restricted = restrict_to_values_keys(&values, metadata);
    debug!(
        "Merging metadata: {} of {} top-level keys match values",
        restricted.len(),
        metadata.len()
    );

    match values {
        Node::Object(obj) => Node::Object(merge_object(obj, &restricted)),
        other => other,
    }
}

/// Keep only the top-level metadata keys that also exist in values
pub fn restrict_to_values_keys(values: &Node, metadata: &Map<String, Value>) -> Map<String, Value> {
    let Some(obj) = values.as_object() else {
        return Map::new();
    };
    let keys: HashSet<&str> = obj.entries.iter().map(|(key, _)| key.as_str()).collect();

    metadata
        .iter()
        .filter(|(key, _)| keys.contains(key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

fn merge_node(values: Node, metadata: Option<&Value>) -> Node {
    match (values, metadata) {
        (Node::Object(obj), Some(Value::Object(meta))) => Node::Object(merge_object(obj, meta)),
        (Node::Scalar(value), Some(Value::Object(meta))) => decorate(value, meta),
        (Node::Array(items), Some(Value::Object(meta))) => decorate(Value::Array(items), meta),
        (node, _) => node,
    }
}

fn merge_object(obj: ObjectNode, metadata: &Map<String, Value>) -> ObjectNode {
    let entries = obj
        .entries
        .into_iter()
        .map(|(key, child)| {
            let merged = merge_node(child, metadata.get(&key));
            (key, merged)
        })
        .collect();

    let annotation = match (obj.annotation, FieldMetadata::annotation_of(metadata)) {
        (Some(mut existing), Some(incoming)) => {
            existing.merge(&incoming);
            Some(existing)
        }
        (existing, incoming) => incoming.or(existing),
    };

    ObjectNode { entries, annotation }
}

fn decorate(value: Value, metadata: &Map<String, Value>) -> Node {
    Node::Decorated(DecoratedLeaf {
        value,
        metadata: FieldMetadata::for_leaf(metadata),
    })
}

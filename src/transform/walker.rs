//! Depth-first walk that groups sibling leaves into form groups

use serde_json::{Map, Value};
use tracing::{trace, warn};

use super::normalizer::{build_group, normalize, LeafContext};
use super::TransformOptions;
use crate::domain::{FieldMetadata, FormField, FormGroup, KeyPath, Node, ObjectNode};

/// Which children of a node count as leaves
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeafRule {
    /// Merged tree: decorated leaves, scalars (null included) and non-empty
    /// arrays. Objects and empty arrays are not leaves.
    Merged,
    /// Raw values without metadata: anything that is not an object, plus
    /// empty objects.
    Relaxed,
}

impl LeafRule {
    pub fn is_leaf(self, node: &Node) -> bool {
        match (self, node) {
            (_, Node::Decorated(_)) | (_, Node::Scalar(_)) => true,
            (LeafRule::Merged, Node::Array(items)) => !items.is_empty(),
            (LeafRule::Relaxed, Node::Array(_)) => true,
            (LeafRule::Merged, Node::Object(_)) => false,
            (LeafRule::Relaxed, Node::Object(obj)) => obj.is_empty(),
        }
    }

    /// Value and decoration of a leaf child, `None` when it is not a leaf
    fn leaf_of(self, node: &Node) -> Option<(Value, Option<&FieldMetadata>)> {
        if !self.is_leaf(node) {
            return None;
        }
        match node {
            Node::Decorated(leaf) => Some((leaf.effective_value().clone(), Some(&leaf.metadata))),
            Node::Object(_) => Some((Value::Object(Map::new()), None)),
            other => Some((other.to_value(), None)),
        }
    }
}

/// Flatten a tree into form groups, in pre-order of their nodes
pub fn flatten(tree: &Node, rule: LeafRule, options: &TransformOptions) -> Vec<FormGroup> {
    let Some(root) = tree.as_object() else {
        warn!("Tree root is a {}, not an object; no form groups produced", tree.kind());
        return Vec::new();
    };

    let mut walker = Walker {
        rule,
        options,
        path: KeyPath::root(),
        groups: Vec::new(),
    };
    walker.visit(root);
    walker.groups
}

struct Walker<'o> {
    rule: LeafRule,
    options: &'o TransformOptions,
    path: KeyPath,
    groups: Vec<FormGroup>,
}

impl Walker<'_> {
    fn visit(&mut self, node: &ObjectNode) {
        let form_data = self.sibling_leaves(node);
        if !form_data.is_empty() {
            let group = self.group_for(node, form_data);
            trace!("Emitting group '{}' with {} fields", group.id, group.form_data.len());
            self.groups.push(group);
        }

        for (key, child) in &node.entries {
            if self.rule.is_leaf(child) {
                continue;
            }
            if let Node::Object(obj) = child {
                self.path.push(key);
                self.visit(obj);
                self.path.pop();
            }
        }
    }

    fn sibling_leaves(&self, node: &ObjectNode) -> Vec<FormField> {
        node.entries
            .iter()
            .filter_map(|(key, child)| {
                let (value, metadata) = self.rule.leaf_of(child)?;
                let leaf = LeafContext {
                    id: self.path.child_id(key),
                    value,
                    metadata,
                };
                Some(normalize(leaf, self.options))
            })
            .collect()
    }

    fn group_for(&self, node: &ObjectNode, form_data: Vec<FormField>) -> FormGroup {
        let annotation = node.annotation.as_ref();
        let group_name = annotation
            .and_then(|a| a.label.as_deref())
            .or(self.path.last())
            .unwrap_or(self.options.default_group_name.as_str());
        let description = annotation.and_then(|a| a.description.as_deref());

        build_group(self.path.id(), group_name, description, form_data)
    }
}

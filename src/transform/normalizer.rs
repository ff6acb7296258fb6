//! Field normalization: builds form records from raw leaves
//!
//! Pure functions of a leaf's id, value and optional decoration. Defaults:
//! - `initialValue`: null becomes ""
//! - `label`: metadata label, else the id, passed through [`validate_label`]
//! - `validationType`: explicit tags, else inferred from the value's shape,
//!   the type tag and the required flag

use serde_json::Value;

use super::TransformOptions;
use crate::domain::path::PATH_SEPARATOR;
use crate::domain::{FieldMetadata, FormField, FormGroup};

/// Qualifier hidden from end users ("global.foo" is shown as "foo")
const GLOBAL_QUALIFIER: &str = "global";

/// Type tag used when metadata declares none.
///
/// Always added ahead of `required`, so a required field without a declared
/// `type` is tagged `["string", "required"]`, never `["required"]` alone.
pub const DEFAULT_FIELD_TYPE: &str = "string";

/// A leaf found by the walker, ready to be normalized
#[derive(Clone, Debug, PartialEq)]
pub struct LeafContext<'a> {
    /// Dot path of the leaf
    pub id: String,
    /// Value before canonicalization
    pub value: Value,
    /// Decoration, when the leaf came out of a merge conflict
    pub metadata: Option<&'a FieldMetadata>,
}

/// Display label for a dotted identifier: a leading `global.` is removed and
/// the last dot-separated segment kept
pub fn validate_label(raw: &str) -> String {
    let unqualified = raw
        .strip_prefix(GLOBAL_QUALIFIER)
        .and_then(|rest| rest.strip_prefix(PATH_SEPARATOR))
        .unwrap_or(raw);

    unqualified
        .rsplit(PATH_SEPARATOR)
        .next()
        .unwrap_or(unqualified)
        .to_string()
}

/// Build the form field descriptor for one leaf
pub fn normalize(leaf: LeafContext<'_>, options: &TransformOptions) -> FormField {
    let default_metadata = FieldMetadata::default();
    let metadata = leaf.metadata.unwrap_or(&default_metadata);

    let label_source = metadata
        .label
        .as_deref()
        .filter(|label| !label.is_empty())
        .unwrap_or(leaf.id.as_str());
    let label = validate_label(label_source);

    let validation_type = match &metadata.validation_type {
        Some(tags) => {
            let mut unique = Vec::with_capacity(tags.len());
            for tag in tags {
                push_unique(&mut unique, tag);
            }
            unique
        }
        None => infer_validation_type(&leaf.value, metadata, options),
    };

    FormField {
        id: leaf.id,
        initial_value: canonical_initial_value(leaf.value),
        description: metadata.description.clone().unwrap_or_default(),
        disabled: metadata.immutable.unwrap_or(false),
        label,
        options: metadata.options.clone().unwrap_or_default(),
        hidden: metadata.hidden.unwrap_or(false),
        regex: metadata.validation.clone().unwrap_or_default(),
        validation_type,
    }
}

/// Build a form group record
pub fn build_group(
    id: String,
    group_name: &str,
    description: Option<&str>,
    form_data: Vec<FormField>,
) -> FormGroup {
    FormGroup {
        id,
        group_name: validate_label(group_name),
        description: description.unwrap_or_default().to_string(),
        form_data,
    }
}

fn canonical_initial_value(value: Value) -> Value {
    match value {
        Value::Null => Value::String(String::new()),
        other => other,
    }
}

fn infer_validation_type(
    value: &Value,
    metadata: &FieldMetadata,
    options: &TransformOptions,
) -> Vec<String> {
    let mut tags = Vec::new();

    if value.is_array() {
        push_unique(&mut tags, "array");
    }
    if value.is_object() {
        push_unique(&mut tags, "object");
    }
    if let Some(type_tag) = metadata
        .type_tag
        .as_deref()
        .or(options.default_field_type.as_deref())
    {
        push_unique(&mut tags, type_tag);
    }
    if metadata.required == Some(true) {
        push_unique(&mut tags, "required");
    }

    tags
}

fn push_unique(tags: &mut Vec<String>, tag: &str) {
    if !tags.iter().any(|existing| existing == tag) {
        tags.push(tag.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn leaf(id: &str, value: Value) -> LeafContext<'static> {
        LeafContext {
            id: id.to_string(),
            value,
            metadata: None,
        }
    }

    #[test]
    fn test_validate_label() {
        assert_eq!(validate_label("global.foo"), "foo");
        assert_eq!(validate_label("global.bar.baz"), "baz");
        assert_eq!(validate_label("foo.bar.baz"), "baz");
        assert_eq!(validate_label("plain"), "plain");
        assert_eq!(validate_label(""), "");
    }

    #[test]
    fn test_qualifier_only_stripped_as_whole_segment() {
        assert_eq!(validate_label("global"), "global");
        assert_eq!(validate_label("globalfoo"), "globalfoo");
    }

    #[test]
    fn test_defaults_without_metadata() {
        let field = normalize(leaf("service.port", json!(80)), &TransformOptions::default());

        assert_eq!(field.id, "service.port");
        assert_eq!(field.initial_value, json!(80));
        assert_eq!(field.label, "port");
        assert_eq!(field.description, "");
        assert!(!field.disabled);
        assert!(!field.hidden);
        assert!(field.options.is_empty());
        assert_eq!(field.regex, "");
        assert_eq!(field.validation_type, vec!["string"]);
    }

    #[test]
    fn test_null_becomes_empty_string() {
        let field = normalize(leaf("image.tag", Value::Null), &TransformOptions::default());
        assert_eq!(field.initial_value, json!(""));
    }

    #[test]
    fn test_shape_tags_come_first() {
        let options = TransformOptions::default();

        let array = normalize(leaf("hosts", json!(["a", "b"])), &options);
        assert_eq!(array.validation_type, vec!["array", "string"]);

        let object = normalize(leaf("annotations", json!({})), &options);
        assert_eq!(object.validation_type, vec!["object", "string"]);
    }

    #[test]
    fn test_metadata_drives_descriptor() {
        let metadata = FieldMetadata {
            description: Some("Pull policy".to_string()),
            label: Some("global.Pull Policy".to_string()),
            options: Some(vec![json!("Always"), json!("IfNotPresent")]),
            type_tag: Some("select".to_string()),
            required: Some(true),
            immutable: Some(true),
            hidden: Some(false),
            validation: Some("^[A-Za-z]+$".to_string()),
            ..Default::default()
        };
        let field = normalize(
            LeafContext {
                id: "image.pullPolicy".to_string(),
                value: json!("Always"),
                metadata: Some(&metadata),
            },
            &TransformOptions::default(),
        );

        assert_eq!(field.label, "Pull Policy");
        assert_eq!(field.description, "Pull policy");
        assert!(field.disabled);
        assert_eq!(field.options.len(), 2);
        assert_eq!(field.regex, "^[A-Za-z]+$");
        assert_eq!(field.validation_type, vec!["select", "required"]);
    }

    #[test]
    fn test_tags_are_deduplicated() {
        let metadata = FieldMetadata {
            type_tag: Some("array".to_string()),
            ..Default::default()
        };
        let field = normalize(
            LeafContext {
                id: "hosts".to_string(),
                value: json!([]),
                metadata: Some(&metadata),
            },
            &TransformOptions::default(),
        );
        assert_eq!(field.validation_type, vec!["array"]);
    }

    #[test]
    fn test_explicit_validation_type_wins() {
        let metadata = FieldMetadata {
            required: Some(true),
            validation_type: Some(vec![
                "number".to_string(),
                "number".to_string(),
                "positive".to_string(),
            ]),
            ..Default::default()
        };
        let field = normalize(
            LeafContext {
                id: "replicaCount".to_string(),
                value: json!(3),
                metadata: Some(&metadata),
            },
            &TransformOptions::default(),
        );
        assert_eq!(field.validation_type, vec!["number", "positive"]);
    }

    #[test]
    fn test_empty_label_falls_back_to_id() {
        let metadata = FieldMetadata {
            label: Some(String::new()),
            ..Default::default()
        };
        let field = normalize(
            LeafContext {
                id: "global.storageClass".to_string(),
                value: json!("gp2"),
                metadata: Some(&metadata),
            },
            &TransformOptions::default(),
        );
        assert_eq!(field.label, "storageClass");
    }

    #[test]
    fn test_no_default_type() {
        let options = TransformOptions {
            default_field_type: None,
            ..Default::default()
        };
        let field = normalize(leaf("enabled", json!(true)), &options);
        assert!(field.validation_type.is_empty());
    }

    #[test]
    fn test_build_group() {
        let group = build_group(
            "global.image".to_string(),
            "global.image",
            None,
            vec![],
        );
        assert_eq!(group.id, "global.image");
        assert_eq!(group.group_name, "image");
        assert_eq!(group.description, "");
    }
}

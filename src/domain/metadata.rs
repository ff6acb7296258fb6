//! Display hints attached to values by a metadata tree

use serde_json::{Map, Value};

/// Key under which a metadata object carries its annotation
pub const ANNOTATION_KEY: &str = "__metadata";

/// Decoration read from a metadata object.
///
/// Fields are extracted leniently: a field with an unexpected JSON type is
/// treated as absent rather than failing the whole transform.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldMetadata {
    pub description: Option<String>,
    pub label: Option<String>,
    /// Enumerated choices, passed through untouched
    pub options: Option<Vec<Value>>,
    /// Declared validation type tag (e.g. "string", "number")
    pub type_tag: Option<String>,
    pub required: Option<bool>,
    pub immutable: Option<bool>,
    pub hidden: Option<bool>,
    /// Validation pattern
    pub validation: Option<String>,
    /// Explicit validation tags; replaces the inferred ones when present
    pub validation_type: Option<Vec<String>>,
    /// Explicit initial value; `Some(Value::Null)` when given as null
    pub initial_value: Option<Value>,
}

impl FieldMetadata {
    /// Extract the decoration fields of a metadata object
    pub fn from_map(obj: &Map<String, Value>) -> Self {
        Self {
            description: obj.get("description").and_then(|v| v.as_str()).map(String::from),
            label: obj.get("label").and_then(|v| v.as_str()).map(String::from),
            options: obj.get("options").and_then(|v| v.as_array()).cloned(),
            type_tag: obj.get("type").and_then(|v| v.as_str()).map(String::from),
            required: obj.get("required").and_then(|v| v.as_bool()),
            immutable: obj.get("immutable").and_then(|v| v.as_bool()),
            hidden: obj.get("hidden").and_then(|v| v.as_bool()),
            validation: obj.get("validation").and_then(|v| v.as_str()).map(String::from),
            validation_type: obj.get("validationType").and_then(|v| v.as_array()).map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            }),
            initial_value: obj.get("initialValue").cloned(),
        }
    }

    /// Annotation stored under [`ANNOTATION_KEY`], if it is an object
    pub fn annotation_of(obj: &Map<String, Value>) -> Option<Self> {
        obj.get(ANNOTATION_KEY)
            .and_then(|v| v.as_object())
            .map(Self::from_map)
    }

    /// Decoration of a metadata object sitting at a leaf position: its flat
    /// fields, overlaid with its annotation
    pub fn for_leaf(obj: &Map<String, Value>) -> Self {
        let mut metadata = Self::from_map(obj);
        if let Some(annotation) = Self::annotation_of(obj) {
            metadata.merge(&annotation);
        }
        metadata
    }

    /// Merge another FieldMetadata into this one.
    /// Other's values override self's values if present (Some).
    pub fn merge(&mut self, other: &FieldMetadata) {
        if other.description.is_some() {
            self.description = other.description.clone();
        }
        if other.label.is_some() {
            self.label = other.label.clone();
        }
        if other.options.is_some() {
            self.options = other.options.clone();
        }
        if other.type_tag.is_some() {
            self.type_tag = other.type_tag.clone();
        }
        if other.required.is_some() {
            self.required = other.required;
        }
        if other.immutable.is_some() {
            self.immutable = other.immutable;
        }
        if other.hidden.is_some() {
            self.hidden = other.hidden;
        }
        if other.validation.is_some() {
            self.validation = other.validation.clone();
        }
        if other.validation_type.is_some() {
            self.validation_type = other.validation_type.clone();
        }
        if other.initial_value.is_some() {
            self.initial_value = other.initial_value.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_from_map_reads_known_fields() {
        let metadata = FieldMetadata::from_map(&object(json!({
            "description": "Number of pods",
            "label": "Replicas",
            "options": [{ "label": "One", "value": 1 }],
            "type": "number",
            "required": true,
            "immutable": false,
            "hidden": true,
            "validation": "^[0-9]+$"
        })));

        assert_eq!(metadata.description.as_deref(), Some("Number of pods"));
        assert_eq!(metadata.label.as_deref(), Some("Replicas"));
        assert_eq!(metadata.options.as_ref().map(Vec::len), Some(1));
        assert_eq!(metadata.type_tag.as_deref(), Some("number"));
        assert_eq!(metadata.required, Some(true));
        assert_eq!(metadata.immutable, Some(false));
        assert_eq!(metadata.hidden, Some(true));
        assert_eq!(metadata.validation.as_deref(), Some("^[0-9]+$"));
        assert!(metadata.initial_value.is_none());
    }

    #[test]
    fn test_from_map_ignores_mistyped_fields() {
        let metadata = FieldMetadata::from_map(&object(json!({
            "label": 42,
            "required": "yes",
            "options": "a,b"
        })));

        assert_eq!(metadata, FieldMetadata::default());
    }

    #[test]
    fn test_null_initial_value_is_kept() {
        let metadata = FieldMetadata::from_map(&object(json!({ "initialValue": null })));
        assert_eq!(metadata.initial_value, Some(Value::Null));
    }

    #[test]
    fn test_for_leaf_overlays_annotation() {
        let metadata = FieldMetadata::for_leaf(&object(json!({
            "label": "Flat",
            "required": true,
            "__metadata": { "label": "Annotated", "hidden": true }
        })));

        assert_eq!(metadata.label.as_deref(), Some("Annotated"));
        assert_eq!(metadata.required, Some(true));
        assert_eq!(metadata.hidden, Some(true));
    }

    #[test]
    fn test_annotation_must_be_object() {
        let obj = object(json!({ "__metadata": "not an object" }));
        assert!(FieldMetadata::annotation_of(&obj).is_none());
    }
}

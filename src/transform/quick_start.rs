//! Quick start: the subset of a form the user must fill in before anything
//! else

use serde_json::Value;

use crate::domain::{FormField, FormGroup};

/// Keep only required fields whose initial value is blank, dropping groups
/// that end up empty. Group order and group metadata are preserved.
pub fn quick_start(groups: &[FormGroup]) -> Vec<FormGroup> {
    groups
        .iter()
        .filter_map(|group| {
            let form_data: Vec<FormField> = group
                .form_data
                .iter()
                .filter(|field| needs_input(field))
                .cloned()
                .collect();

            if form_data.is_empty() {
                None
            } else {
                Some(FormGroup {
                    id: group.id.clone(),
                    group_name: group.group_name.clone(),
                    description: group.description.clone(),
                    form_data,
                })
            }
        })
        .collect()
}

/// Required and still blank
pub fn needs_input(field: &FormField) -> bool {
    field.is_required() && is_blank(&field.initial_value)
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

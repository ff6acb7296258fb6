use thiserror::Error;

use crate::config::{Settings, TransformSettings};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_transform(&settings.transform) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_transform(transform: &TransformSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        match &transform.default_field_type {
            Some(field_type) if field_type.is_empty() => {
                errors.push(ValidationError::MissingField(
                    "transform.default_field_type".to_string(),
                ));
            }
            Some(field_type) if field_type.trim() != field_type => {
                errors.push(ValidationError::InvalidValue {
                    field: "transform.default_field_type".to_string(),
                    reason: "Type tag must not have surrounding whitespace".to_string(),
                });
            }
            _ => {}
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

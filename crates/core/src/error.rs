use std::fmt;

use serde::{Deserialize, Serialize};

/// A single field that failed a movie invariant.
///
/// `field` is the external (camelCase) field name, e.g. `"releaseDate"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        FieldError {
            field: field.to_owned(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// One or more fields failed validation.
///
/// Never constructed empty: every failing field is reported, not just the
/// first one found.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid movie: {}", summary(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        ValidationError {
            errors: vec![FieldError::new(field, message)],
        }
    }

    /// `Ok(())` when `errors` is empty, otherwise the collected failure.
    pub fn check(errors: Vec<FieldError>) -> Result<(), ValidationError> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { errors })
        }
    }

    /// Whether `field` is among the failures.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Serialize as `{"errors": [{"field": .., "message": ..}, ..]}`.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({ "errors": self.errors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_empty_is_ok() {
        assert!(ValidationError::check(Vec::new()).is_ok());
    }

    #[test]
    fn display_lists_every_field() {
        let err = ValidationError::check(vec![
            FieldError::new("title", "Title is required"),
            FieldError::new("rating", "Rating must be between 0 and 10"),
        ])
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid movie: title: Title is required; rating: Rating must be between 0 and 10"
        );
        assert!(err.has_field("rating"));
        assert!(!err.has_field("genre"));
    }

    #[test]
    fn json_shape() {
        let err = ValidationError::single("genre", "Invalid genre");
        assert_eq!(
            err.to_json_value(),
            serde_json::json!({"errors": [{"field": "genre", "message": "Invalid genre"}]})
        );
    }
}

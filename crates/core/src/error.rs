use std::fmt;

use serde::Serialize;

/// Why a single payload field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// Required field absent or `null`.
    Missing,
    /// Present, but not a string.
    TypeMismatch,
    /// Required string that is empty or whitespace-only.
    Blank,
    /// Longer than the field's maximum length.
    TooLong,
    /// Contains a character the store cannot hold (NUL).
    InvalidCharacter,
}

/// A rejected field in a create payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: impl Into<String>, kind: FieldErrorKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }

    /// Human-readable description of the failure.
    pub fn message(&self) -> String {
        match self.kind {
            FieldErrorKind::Missing => format!("'{}' is required", self.field),
            FieldErrorKind::TypeMismatch => format!("'{}' must be a string", self.field),
            FieldErrorKind::Blank => format!("'{}' must not be blank", self.field),
            FieldErrorKind::TooLong => format!("'{}' exceeds the maximum length", self.field),
            FieldErrorKind::InvalidCharacter => {
                format!("'{}' contains a NUL character", self.field)
            }
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {}", describe_fields(.0))]
    InvalidFields(Vec<FieldError>),

    #[error("Validation failed: {0}")]
    Validation(String),
}

fn describe_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(FieldError::message)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_fields_display_lists_every_field() {
        let err = CoreError::InvalidFields(vec![
            FieldError::new("name", FieldErrorKind::Missing),
            FieldError::new("email", FieldErrorKind::TypeMismatch),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: 'name' is required; 'email' must be a string"
        );
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_value(FieldError::new("role", FieldErrorKind::TypeMismatch))
            .unwrap();
        assert_eq!(json["field"], "role");
        assert_eq!(json["kind"], "type_mismatch");

        let json = serde_json::to_value(FieldError::new("name", FieldErrorKind::InvalidCharacter))
            .unwrap();
        assert_eq!(json["kind"], "invalid_character");
    }
}

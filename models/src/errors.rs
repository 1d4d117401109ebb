use std::fmt;
pub use thiserror::Error;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeJsonError;
use crate::identifiers::Identifier;

#[derive(Debug, Serialize, Deserialize, Error, Clone, PartialEq)]
pub enum HospitalError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Invalid Request: {0}")]
    InvalidRequest(String),
    #[error("entity with identifier {0} was not found")]
    NotFound(Identifier),
    #[error("Validation error: {0}")]
    Validation(ValidationError),
}

impl From<SerdeJsonError> for HospitalError {
    fn from(err: SerdeJsonError) -> Self {
        HospitalError::SerializationError(format!("JSON serialization error: {}", err))
    }
}

impl From<ValidationError> for HospitalError {
    fn from(err: ValidationError) -> Self {
        HospitalError::Validation(err)
    }
}

/// A single inline form error, attached to the field that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        FieldError {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Serialize, Deserialize, Error, PartialEq, Eq, Clone)]
pub enum ValidationError {
    #[error("invalid value provided")]
    InvalidValue,
    #[error("identifier '{0}' is invalid")]
    InvalidIdentifier(String),
    #[error("identifier has invalid length")]
    InvalidIdentifierLength,
    #[error("form has {} invalid field(s)", .0.len())]
    FormRejected(Vec<FieldError>),
}

impl ValidationError {
    /// Field errors carried by a rejected form; empty for every other variant.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ValidationError::FormRejected(errors) => errors,
            _ => &[],
        }
    }

    /// First message reported for `field`, for inline display next to the input.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.field_errors()
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

/// A type alias for a `Result` that returns a `HospitalError` on failure.
pub type HospitalResult<T> = Result<T, HospitalError>;

/// A type alias for a `Result` that returns a `ValidationError` on failure.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_form_reports_messages_per_field() {
        let err = ValidationError::FormRejected(vec![
            FieldError::new("name", "Role name must be at least 2 characters"),
            FieldError::new("permissions", "At least one permission is required"),
        ]);
        assert_eq!(err.to_string(), "form has 2 invalid field(s)");
        assert_eq!(err.message_for("permissions"), Some("At least one permission is required"));
        assert_eq!(err.message_for("description"), None);
    }

    #[test]
    fn validation_error_wraps_into_hospital_error() {
        let err: HospitalError = ValidationError::InvalidValue.into();
        assert_eq!(err, HospitalError::Validation(ValidationError::InvalidValue));
        assert!(err.to_string().starts_with("Validation error"));
    }
}

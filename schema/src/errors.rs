use thiserror::Error;

/// Error type for form-schema validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A field value broke one of its constraints. Carries the inline message.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// The schema itself is malformed (e.g., an invalid regex pattern).
    #[error("Invalid schema definition: {0}")]
    InvalidDefinition(String),
}

impl SchemaError {
    /// Message suitable for display next to the offending field.
    pub fn message(&self) -> String {
        match self {
            SchemaError::ConstraintViolation(msg) => msg.clone(),
            SchemaError::InvalidDefinition(msg) => format!("Internal schema error: {}", msg),
        }
    }
}

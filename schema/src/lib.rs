// schema/src/lib.rs

use serde::Serialize;
use serde_json::Value;

use models::errors::{FieldError, ValidationError, ValidationResult};

// --- CORE TRAITS ---

/// A trait every form dialog implements to declare the constraints on its fields.
pub trait FormSchema: Send + Sync {
    /// The unique name of the form (e.g., "RoleForm").
    fn schema_name() -> &'static str;

    /// The list of field constraints, in display order.
    fn field_constraints() -> Vec<constraints::FieldConstraint>;

    /// Validates a JSON object against every field constraint.
    ///
    /// All failing fields are reported, one error per field, so each can be
    /// shown next to its input.
    fn validate(values: &Value) -> ValidationResult<()> {
        let errors: Vec<FieldError> = Self::field_constraints()
            .iter()
            .filter_map(|constraint| {
                let value = values.get(&constraint.name).unwrap_or(&Value::Null);
                constraint
                    .validate(value)
                    .err()
                    .map(|e| FieldError::new(&constraint.name, e.message()))
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            log::debug!("{} rejected with {} field error(s)", Self::schema_name(), errors.len());
            Err(ValidationError::FormRejected(errors))
        }
    }

    /// Serializes typed form data and validates it.
    fn validate_data<T: Serialize>(data: &T) -> ValidationResult<()> {
        let values = serde_json::to_value(data).map_err(|_| ValidationError::InvalidValue)?;
        Self::validate(&values)
    }
}

pub mod constraints;
pub mod errors;
pub mod forms;

pub use constraints::*;
pub use errors::*;
pub use forms::*;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::SchemaError;

/// Simple check for local@domain.tld structure.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

/// Defines the set of allowed string values for a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValues {
    pub allowed_values: Vec<String>,
}

impl EnumValues {
    pub fn new<S: AsRef<str>>(allowed_values: &[S]) -> Self {
        EnumValues {
            allowed_values: allowed_values.iter().map(|v| v.as_ref().to_string()).collect(),
        }
    }
}

/// Defines the data types allowed for a field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DataType {
    String,
    Integer,
    UnsignedInteger,
    Float,
    Boolean,
    List(Box<DataType>),
}

/// A single rule a field value must satisfy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Constraint {
    /// Must be present and non-null.
    Required,
    /// The field may be missing or null.
    Optional,
    /// Minimum length for strings, counted in characters.
    MinLength(usize),
    /// Maximum length for strings, counted in characters.
    MaxLength(usize),
    /// Minimum number of entries for lists.
    MinItems(usize),
    /// Must be a valid email format.
    ValidateEmail,
    /// Must match a regex pattern.
    Format(String),
    /// Minimum value for numbers.
    Min(i64),
    /// Maximum value for numbers.
    Max(i64),
    /// Only allows values from a predefined set. Applies to each entry of a list.
    Enum(Vec<String>),
}

/// The constraints declared for one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConstraint {
    /// The name of the field as serialized (e.g., "name", "permissions").
    pub name: String,
    pub required: bool,
    pub description: Option<String>,
    pub data_type: DataType,
    pub constraints: Vec<Constraint>,
    /// Inline message shown for any failure on this field, replacing the generated one.
    pub message: Option<String>,
}

impl FieldConstraint {
    /// Creates a string field. Adds the Required constraint if `required` is true.
    pub fn new(name: &str, required: bool) -> Self {
        FieldConstraint {
            name: name.to_string(),
            required,
            description: None,
            data_type: DataType::String,
            constraints: if required { vec![Constraint::Required] } else { vec![Constraint::Optional] },
            message: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_data_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }

    /// Replaces the constraint list. The `required` flag follows the presence of `Required`.
    pub fn with_constraints(mut self, constraints: Vec<Constraint>) -> Self {
        self.constraints = constraints;
        self.required = self.constraints.contains(&Constraint::Required);
        if !self.required && !self.constraints.contains(&Constraint::Optional) {
            self.constraints.push(Constraint::Optional);
        }
        self
    }

    /// Adds an Enum constraint, replacing any existing one.
    pub fn with_enum_values(mut self, enum_values: EnumValues) -> Self {
        self.constraints.retain(|c| !matches!(c, Constraint::Enum(_)));
        self.constraints.push(Constraint::Enum(enum_values.allowed_values));
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    /// Validates a value against the data type and every constraint.
    pub fn validate(&self, value: &Value) -> Result<(), SchemaError> {
        self.check(value).map_err(|e| match (&self.message, e) {
            (Some(msg), SchemaError::ConstraintViolation(_)) => SchemaError::ConstraintViolation(msg.clone()),
            (_, e) => e,
        })
    }

    fn check(&self, value: &Value) -> Result<(), SchemaError> {
        if value.is_null() {
            if self.required {
                return Err(violation(format!("Field '{}' is required.", self.name)));
            }
            return Ok(());
        }

        if !check_data_type(&self.data_type, value) {
            return Err(violation(format!("Field '{}' failed type check for {:?}.", self.name, self.data_type)));
        }

        for constraint in &self.constraints {
            match constraint {
                Constraint::Required | Constraint::Optional => {}
                Constraint::MinLength(min_len) => {
                    if let Some(s) = value.as_str() {
                        let len = s.chars().count();
                        if len < *min_len {
                            return Err(violation(format!(
                                "Field '{}' length ({}) is below the minimum of {}.",
                                self.name, len, min_len
                            )));
                        }
                    }
                }
                Constraint::MaxLength(max_len) => {
                    if let Some(s) = value.as_str() {
                        let len = s.chars().count();
                        if len > *max_len {
                            return Err(violation(format!(
                                "Field '{}' length ({}) is above the maximum of {}.",
                                self.name, len, max_len
                            )));
                        }
                    }
                }
                Constraint::MinItems(min_items) => {
                    if let Some(items) = value.as_array() {
                        if items.len() < *min_items {
                            return Err(violation(format!(
                                "Field '{}' needs at least {} item(s).",
                                self.name, min_items
                            )));
                        }
                    }
                }
                Constraint::ValidateEmail => {
                    if let Some(s) = value.as_str() {
                        if !compile(EMAIL_PATTERN, &self.name)?.is_match(s) {
                            return Err(violation(format!(
                                "Field '{}' value '{}' is not a valid email address.",
                                self.name, s
                            )));
                        }
                    }
                }
                Constraint::Format(pattern) => {
                    if let Some(s) = value.as_str() {
                        if !compile(pattern, &self.name)?.is_match(s) {
                            return Err(violation(format!(
                                "Field '{}' does not match format pattern: {}",
                                self.name, pattern
                            )));
                        }
                    }
                }
                Constraint::Min(min_val) => {
                    if let Some(num) = value.as_f64() {
                        if num < *min_val as f64 {
                            return Err(violation(format!(
                                "Field '{}' value {} is below the minimum of {}.",
                                self.name, num, min_val
                            )));
                        }
                    }
                }
                Constraint::Max(max_val) => {
                    if let Some(num) = value.as_f64() {
                        if num > *max_val as f64 {
                            return Err(violation(format!(
                                "Field '{}' value {} is above the maximum of {}.",
                                self.name, num, max_val
                            )));
                        }
                    }
                }
                Constraint::Enum(allowed_values) => {
                    let candidates: Vec<&str> = match value {
                        Value::String(s) => vec![s.as_str()],
                        Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
                        _ => Vec::new(),
                    };
                    if let Some(bad) = candidates.iter().find(|c| !allowed_values.iter().any(|a| a == *c)) {
                        return Err(violation(format!(
                            "Field '{}' value '{}' is not one of the allowed values: {:?}",
                            self.name, bad, allowed_values
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

fn violation(msg: String) -> SchemaError {
    SchemaError::ConstraintViolation(msg)
}

fn compile(pattern: &str, field: &str) -> Result<Regex, SchemaError> {
    Regex::new(pattern)
        .map_err(|_| SchemaError::InvalidDefinition(format!("invalid regex pattern for field '{}'", field)))
}

fn check_data_type(data_type: &DataType, value: &Value) -> bool {
    match data_type {
        DataType::String => value.is_string(),
        DataType::Integer => value.is_i64(),
        DataType::UnsignedInteger => value.is_u64(),
        DataType::Float => value.is_number(),
        DataType::Boolean => value.is_boolean(),
        DataType::List(inner) => value
            .as_array()
            .map(|items| items.iter().all(|item| check_data_type(inner, item)))
            .unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn min_length_counts_characters() {
        let field = FieldConstraint::new("name", true).with_constraints(vec![Constraint::Required, Constraint::MinLength(2)]);
        assert!(field.validate(&json!("é")).is_err());
        assert!(field.validate(&json!("él")).is_ok());
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let field = FieldConstraint::new("description", true);
        assert!(matches!(field.validate(&Value::Null), Err(SchemaError::ConstraintViolation(_))));
        assert!(FieldConstraint::new("notes", false).validate(&Value::Null).is_ok());
    }

    #[test]
    fn custom_message_replaces_generated_one() {
        let field = FieldConstraint::new("name", true)
            .with_constraints(vec![Constraint::Required, Constraint::MinLength(2)])
            .with_message("Role name must be at least 2 characters");
        let err = field.validate(&json!("A")).unwrap_err();
        assert_eq!(err.message(), "Role name must be at least 2 characters");
    }

    #[test]
    fn enum_checks_each_list_entry() {
        let field = FieldConstraint::new("permissions", true)
            .with_data_type(DataType::List(Box::new(DataType::String)))
            .with_constraints(vec![Constraint::Required, Constraint::MinItems(1)])
            .with_enum_values(EnumValues::new(&["reporting", "lab_results"]));
        assert!(field.validate(&json!(["reporting"])).is_ok());
        assert!(field.validate(&json!([])).is_err());
        assert!(field.validate(&json!(["reporting", "root_access"])).is_err());
        assert!(field.validate(&json!([1])).is_err());
    }

    #[test]
    fn email_format_is_checked() {
        let field = FieldConstraint::new("email", true)
            .with_constraints(vec![Constraint::Required, Constraint::ValidateEmail]);
        assert!(field.validate(&json!("nurse.mary@medicare.com")).is_ok());
        assert!(field.validate(&json!("nurse.mary")).is_err());
    }

    #[test]
    fn invalid_pattern_is_a_definition_error() {
        let field = FieldConstraint::new("code", true)
            .with_constraints(vec![Constraint::Required, Constraint::Format("(".to_string())]);
        assert!(matches!(field.validate(&json!("x")), Err(SchemaError::InvalidDefinition(_))));
    }

    #[test]
    fn numeric_bounds_apply_to_floats_and_integers() {
        let field = FieldConstraint::new("stock", true)
            .with_data_type(DataType::Float)
            .with_constraints(vec![Constraint::Required, Constraint::Min(0)]);
        assert!(field.validate(&json!(0)).is_ok());
        assert!(field.validate(&json!(12.5)).is_ok());
        assert!(field.validate(&json!(-1)).is_err());
        assert!(field.validate(&json!("12")).is_err());
    }
}

use serde::{Deserialize, Serialize};

use models::access::PERMISSION_CATALOGUE;

use crate::constraints::{Constraint, DataType, EnumValues, FieldConstraint};
use crate::FormSchema;

/// Values submitted from the create/edit role dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleFormData {
    pub name: String,
    pub description: String,
    pub permissions: Vec<String>,
}

impl RoleFormData {
    pub fn new(name: &str, description: &str, permissions: &[&str]) -> Self {
        RoleFormData {
            name: name.to_string(),
            description: description.to_string(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Flips `permission` in the dialog's selection, keeping selection order.
    pub fn toggle_permission(&mut self, permission: &str) {
        if let Some(pos) = self.permissions.iter().position(|p| p == permission) {
            self.permissions.remove(pos);
        } else {
            self.permissions.push(permission.to_string());
        }
    }
}

/// Schema of the role dialog.
pub struct RoleForm;

impl FormSchema for RoleForm {
    fn schema_name() -> &'static str {
        "RoleForm"
    }

    fn field_constraints() -> Vec<FieldConstraint> {
        vec![
            FieldConstraint::new("name", true)
                .with_description("Human-readable role name (e.g., 'Nurse').")
                .with_constraints(vec![Constraint::Required, Constraint::MinLength(2)])
                .with_message("Role name must be at least 2 characters"),

            FieldConstraint::new("description", true)
                .with_description("What holders of the role are expected to do.")
                .with_constraints(vec![Constraint::Required, Constraint::MinLength(10)])
                .with_message("Description must be at least 10 characters"),

            FieldConstraint::new("permissions", true)
                .with_description("Permission tags granted by the role.")
                .with_data_type(DataType::List(Box::new(DataType::String)))
                .with_constraints(vec![Constraint::Required, Constraint::MinItems(1)])
                .with_enum_values(EnumValues::new(&PERMISSION_CATALOGUE))
                .with_message("At least one permission is required"),
        ]
    }
}

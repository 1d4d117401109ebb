use serde::{Deserialize, Serialize};

use crate::constraints::{Constraint, EnumValues, FieldConstraint};
use crate::FormSchema;

pub const USER_ROLES: [&str; 5] = ["administrator", "doctor", "nurse", "receptionist", "pharmacist"];

pub const USER_DEPARTMENTS: [&str; 7] = [
    "cardiology",
    "neurology",
    "pediatrics",
    "emergency",
    "surgery",
    "pharmacy",
    "administration",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFormData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub department: String,
}

/// Schema of the user account dialog.
pub struct UserForm;

impl FormSchema for UserForm {
    fn schema_name() -> &'static str {
        "UserForm"
    }

    fn field_constraints() -> Vec<FieldConstraint> {
        vec![
            FieldConstraint::new("firstName", true)
                .with_constraints(vec![Constraint::Required, Constraint::MinLength(2)])
                .with_message("First name must be at least 2 characters"),
            FieldConstraint::new("lastName", true)
                .with_constraints(vec![Constraint::Required, Constraint::MinLength(2)])
                .with_message("Last name must be at least 2 characters"),
            FieldConstraint::new("email", true)
                .with_constraints(vec![Constraint::Required, Constraint::ValidateEmail])
                .with_message("Invalid email address"),
            FieldConstraint::new("phone", true)
                .with_constraints(vec![Constraint::Required, Constraint::MinLength(10)])
                .with_message("Phone number must be at least 10 digits"),
            FieldConstraint::new("role", true)
                .with_constraints(vec![Constraint::Required, Constraint::MinLength(1)])
                .with_enum_values(EnumValues::new(&USER_ROLES))
                .with_message("Please select a role"),
            FieldConstraint::new("department", true)
                .with_constraints(vec![Constraint::Required, Constraint::MinLength(1)])
                .with_enum_values(EnumValues::new(&USER_DEPARTMENTS))
                .with_message("Please select a department"),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPasswordData {
    pub email: String,
}

/// Schema of the forgot-password form.
pub struct ForgotPasswordForm;

impl FormSchema for ForgotPasswordForm {
    fn schema_name() -> &'static str {
        "ForgotPasswordForm"
    }

    fn field_constraints() -> Vec<FieldConstraint> {
        vec![FieldConstraint::new("email", true)
            .with_constraints(vec![Constraint::Required, Constraint::ValidateEmail])
            .with_message("Please enter a valid email address")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_user() -> UserFormData {
        UserFormData {
            first_name: "Mary".to_string(),
            last_name: "Jones".to_string(),
            email: "mary.jones@medicare.com".to_string(),
            phone: "5551234567".to_string(),
            role: "nurse".to_string(),
            department: "pediatrics".to_string(),
        }
    }

    #[test]
    fn valid_user_passes() {
        assert!(UserForm::validate_data(&valid_user()).is_ok());
    }

    #[test]
    fn unselected_role_and_bad_email_are_reported() {
        let mut data = valid_user();
        data.role.clear();
        data.email = "mary".to_string();
        let err = UserForm::validate_data(&data).unwrap_err();
        assert_eq!(err.message_for("role"), Some("Please select a role"));
        assert_eq!(err.message_for("email"), Some("Invalid email address"));
        assert_eq!(err.field_errors().len(), 2);
    }

    #[test]
    fn forgot_password_requires_an_email() {
        let err = ForgotPasswordForm::validate_data(&ForgotPasswordData::default()).unwrap_err();
        assert_eq!(err.message_for("email"), Some("Please enter a valid email address"));
    }
}

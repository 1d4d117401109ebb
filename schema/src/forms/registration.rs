// schema/src/forms/registration.rs
//! "Add ..." dialogs for patients, doctors, medications and appointments.
//! Submissions are acknowledged but never stored, so validation only guards
//! against obviously empty input.
use serde::{Deserialize, Serialize};

use crate::constraints::{Constraint, DataType, FieldConstraint};
use crate::FormSchema;

const DATE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";

fn required_text(name: &str, label: &str) -> FieldConstraint {
    FieldConstraint::new(name, true)
        .with_constraints(vec![Constraint::Required, Constraint::MinLength(1)])
        .with_message(&format!("{} is required", label))
}

fn optional_email(name: &str) -> FieldConstraint {
    // An empty string means the field was left blank.
    FieldConstraint::new(name, false)
        .with_constraints(vec![Constraint::Optional, Constraint::Format(r"^$|^[^@\s]+@[^@\s]+\.[^@\s]+$".to_string())])
        .with_message("Invalid email address")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientFormData {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub condition: String,
}

pub struct PatientForm;

impl FormSchema for PatientForm {
    fn schema_name() -> &'static str {
        "PatientForm"
    }

    fn field_constraints() -> Vec<FieldConstraint> {
        vec![
            required_text("name", "Full name"),
            FieldConstraint::new("age", true)
                .with_data_type(DataType::UnsignedInteger)
                .with_constraints(vec![Constraint::Required, Constraint::Max(150)])
                .with_message("Age must be between 0 and 150"),
            required_text("gender", "Gender"),
            required_text("phone", "Phone"),
            optional_email("email"),
            required_text("condition", "Condition"),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorFormData {
    pub name: String,
    pub specialization: String,
    pub department: String,
    pub experience: String,
    pub phone: String,
    pub email: String,
    pub location: String,
}

pub struct DoctorForm;

impl FormSchema for DoctorForm {
    fn schema_name() -> &'static str {
        "DoctorForm"
    }

    fn field_constraints() -> Vec<FieldConstraint> {
        vec![
            required_text("name", "Full name"),
            required_text("specialization", "Specialization"),
            required_text("department", "Department"),
            FieldConstraint::new("experience", true)
                .with_constraints(vec![Constraint::Required, Constraint::Format(r"^\d+\s+years?$".to_string())])
                .with_message("Experience must look like '10 years'"),
            required_text("phone", "Phone"),
            optional_email("email"),
            FieldConstraint::new("location", false),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicationFormData {
    pub name: String,
    pub category: String,
    pub manufacturer: String,
    pub stock: i64,
    pub price: f64,
    pub status: String,
}

pub struct MedicationForm;

impl FormSchema for MedicationForm {
    fn schema_name() -> &'static str {
        "MedicationForm"
    }

    fn field_constraints() -> Vec<FieldConstraint> {
        vec![
            required_text("name", "Medication name"),
            required_text("category", "Category"),
            required_text("manufacturer", "Manufacturer"),
            FieldConstraint::new("stock", true)
                .with_data_type(DataType::Integer)
                .with_constraints(vec![Constraint::Required, Constraint::Min(0)])
                .with_message("Stock cannot be negative"),
            FieldConstraint::new("price", true)
                .with_data_type(DataType::Float)
                .with_constraints(vec![Constraint::Required, Constraint::Min(0)])
                .with_message("Price cannot be negative"),
            FieldConstraint::new("status", false),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentFormData {
    pub patient: String,
    pub doctor: String,
    pub department: String,
    /// YYYY-MM-DD
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub appointment_type: String,
    pub notes: String,
}

pub struct AppointmentForm;

impl FormSchema for AppointmentForm {
    fn schema_name() -> &'static str {
        "AppointmentForm"
    }

    fn field_constraints() -> Vec<FieldConstraint> {
        vec![
            required_text("patient", "Patient"),
            required_text("doctor", "Doctor"),
            required_text("department", "Department"),
            FieldConstraint::new("date", true)
                .with_constraints(vec![Constraint::Required, Constraint::Format(DATE_PATTERN.to_string())])
                .with_message("Date must be in YYYY-MM-DD format"),
            required_text("time", "Time"),
            required_text("type", "Appointment type"),
            FieldConstraint::new("notes", false),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_patient_name_is_reported() {
        let data = PatientFormData {
            name: String::new(),
            age: 40,
            gender: "Female".to_string(),
            phone: "+1 (555) 000-0000".to_string(),
            email: String::new(),
            condition: "Asthma".to_string(),
        };
        let err = PatientForm::validate_data(&data).unwrap_err();
        assert_eq!(err.message_for("name"), Some("Full name is required"));
        assert_eq!(err.field_errors().len(), 1);
    }

    #[test]
    fn doctor_experience_must_be_in_years() {
        let mut data = DoctorFormData {
            name: "Dr. Ana Ruiz".to_string(),
            specialization: "Neurology".to_string(),
            department: "Internal Medicine".to_string(),
            experience: "10 years".to_string(),
            phone: "+1 (555) 777-8888".to_string(),
            email: "ana.ruiz@medicare.com".to_string(),
            location: String::new(),
        };
        assert!(DoctorForm::validate_data(&data).is_ok());
        data.experience = "a decade".to_string();
        assert!(DoctorForm::validate_data(&data).is_err());
    }

    #[test]
    fn negative_stock_is_rejected() {
        let data = MedicationFormData {
            name: "Paracetamol".to_string(),
            category: "Pain Relief".to_string(),
            manufacturer: "MediCare Ltd.".to_string(),
            stock: -5,
            price: 3.5,
            status: "Available".to_string(),
        };
        let err = MedicationForm::validate_data(&data).unwrap_err();
        assert_eq!(err.message_for("stock"), Some("Stock cannot be negative"));
    }

    #[test]
    fn appointment_date_format_is_checked() {
        let data = AppointmentFormData {
            patient: "John Smith".to_string(),
            doctor: "Dr. Sarah Wilson".to_string(),
            department: "Cardiology".to_string(),
            date: "20/01/2024".to_string(),
            time: "09:00 AM".to_string(),
            appointment_type: "Consultation".to_string(),
            notes: String::new(),
        };
        let err = AppointmentForm::validate_data(&data).unwrap_err();
        assert_eq!(err.message_for("date"), Some("Date must be in YYYY-MM-DD format"));
    }
}

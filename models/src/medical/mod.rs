// models/src/medical/mod.rs

pub mod appointment;
pub mod doctor;
pub mod medical_record;
pub mod medication;
pub mod patient;

pub use appointment::{appointment_type_badge, Appointment, AppointmentStatus};
pub use doctor::{Doctor, DoctorStatus};
pub use medical_record::{record_type_badge, MedicalRecord};
pub use medication::{Medication, MedicationStatus};
pub use patient::{Patient, PatientStatus};

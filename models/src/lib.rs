// models/src/lib.rs

// Flat domain records shared by every MediCare crate. Nothing in here performs I/O;
// all records are plain data with serde support.
#[macro_use]
mod macros;

pub mod access;
pub mod badges;
pub mod dashboard;
pub mod errors;
pub mod identifiers;
pub mod medical;
pub mod settings;

pub use access::{ActivityLogEntry, ActivityStatus, PermissionSetting, Role, User, UserRole, PERMISSION_CATALOGUE};
pub use badges::{Badge, BadgeVariant, HasBadge};
pub use dashboard::{DepartmentShare, MonthlyStat, RecentActivity, SatisfactionPoint, StatsCard, Trend};
pub use errors::{FieldError, HospitalError, HospitalResult, ValidationError, ValidationResult};
pub use identifiers::Identifier;
pub use medical::{
    appointment_type_badge, record_type_badge, Appointment, AppointmentStatus, Doctor, DoctorStatus, MedicalRecord, Medication,
    MedicationStatus, Patient, PatientStatus,
};
pub use settings::{HospitalProfile, NotificationPreferences, SystemSettings};

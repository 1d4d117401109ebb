// lib/src/lib.rs

// Shared plumbing for the MediCare pages: configuration, list filtering,
// the signed-in session, the route table and the demo records.

pub mod config;
pub mod filtering;
pub mod navigation;
pub mod seed_data;
pub mod session;

pub use config::{load_app_config, AppConfig};
pub use filtering::{
    filter_records, ActivityFilter, AppointmentFilter, Criterion, DoctorFilter, FilterSpec, Filterable, MedicationFilter,
    PatientFilter, RecordFilter,
};
pub use navigation::{resolve, NavItem, Page};
pub use session::Session;

// hospital_services/src/lib.rs

pub mod access;
pub mod analytics;
pub mod appointment;
pub mod doctor;
pub mod hospital;
pub mod patient;
pub mod pharmacy;
pub mod records;
pub mod settings;

pub use access::*;
pub use analytics::*;
pub use appointment::*;
pub use doctor::*;
pub use hospital::*;
pub use patient::*;
pub use pharmacy::*;
pub use records::*;
pub use settings::*;

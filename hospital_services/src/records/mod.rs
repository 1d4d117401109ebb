// hospital_services/src/records/mod.rs

pub mod record_service;

pub use record_service::*;

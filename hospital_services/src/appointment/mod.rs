// hospital_services/src/appointment/mod.rs

pub mod appointment_service;

pub use appointment_service::*;

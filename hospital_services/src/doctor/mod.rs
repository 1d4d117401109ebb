// hospital_services/src/doctor/mod.rs

pub mod doctor_service;

pub use doctor_service::*;

// hospital_services/src/pharmacy/mod.rs

pub mod pharmacy_service;

pub use pharmacy_service::*;

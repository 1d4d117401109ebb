// hospital_services/src/settings/mod.rs

pub mod password_reset;
pub mod settings_service;

pub use password_reset::*;
pub use settings_service::*;

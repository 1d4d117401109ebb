// hospital_services/src/access/mod.rs

pub mod permission_settings;
pub mod role_service;
pub mod user_activity;

pub use permission_settings::*;
pub use role_service::*;
pub use user_activity::*;

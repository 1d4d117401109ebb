// hospital_services/src/analytics/mod.rs

pub mod analytics_service;
pub mod dashboard_service;

pub use analytics_service::*;
pub use dashboard_service::*;

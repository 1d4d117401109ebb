// schema/src/forms/mod.rs

pub mod registration;
pub mod role_form;
pub mod user_form;

pub use registration::*;
pub use role_form::*;
pub use user_form::*;

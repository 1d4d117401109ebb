// lib/src/config/mod.rs

pub mod config_helpers;
pub mod config_structs;

pub use config_helpers::*;
pub use config_structs::*;

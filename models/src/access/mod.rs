// models/src/access/mod.rs

pub mod activity_log;
pub mod permission;
pub mod role;
pub mod user;

pub use activity_log::{ActivityLogEntry, ActivityStatus};
pub use permission::PermissionSetting;
pub use role::{Role, DEFAULT_ROLE_COLOR, PERMISSION_CATALOGUE};
pub use user::{User, UserRole};

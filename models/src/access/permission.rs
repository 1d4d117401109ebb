use serde::{Deserialize, Serialize};

use crate::identifiers::Identifier;

/// A system-wide permission switch on the permission settings screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSetting {
    pub id: Identifier,
    pub name: String,
    pub description: String,
    /// Administration, Medical, Operations, Finance, Analytics, Emergency
    pub category: String,
    pub enabled: bool,
}

impl PermissionSetting {
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }
}

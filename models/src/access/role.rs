use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::identifiers::Identifier;

/// Every permission tag a role may carry.
pub const PERMISSION_CATALOGUE: [&str; 8] = [
    "user_management",
    "patient_records",
    "appointment_scheduling",
    "billing_access",
    "reporting",
    "system_admin",
    "pharmacy_access",
    "lab_results",
];

/// Colour given to roles created during the session.
pub const DEFAULT_ROLE_COLOR: &str = "bg-muted";

/// An authorization role (e.g., Administrator, Doctor, Nurse).
///
/// Permissions are descriptive only: nothing in the system checks them before
/// allowing an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: Identifier,
    pub name: String,
    pub description: String,
    pub permissions: BTreeSet<String>,
    /// Number of users holding the role. Informational.
    pub user_count: u32,
    pub color: String,
}

impl Role {
    /// A role created in this session: fresh id, no users, default colour.
    pub fn new(name: String, description: String, permissions: BTreeSet<String>) -> Self {
        Role {
            id: Identifier::generate(),
            name,
            description,
            permissions,
            user_count: 0,
            color: DEFAULT_ROLE_COLOR.to_string(),
        }
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }

    /// Flips membership of `permission` and returns whether the role now holds it.
    pub fn toggle_permission(&mut self, permission: &str) -> bool {
        if self.permissions.remove(permission) {
            false
        } else {
            self.permissions.insert(permission.to_string());
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_role_starts_without_users() {
        let role = Role::new(
            "Auditor".to_string(),
            "Reviews compliance records".to_string(),
            BTreeSet::from(["reporting".to_string()]),
        );
        assert_eq!(role.user_count, 0);
        assert_eq!(role.color, DEFAULT_ROLE_COLOR);
        assert!(role.has_permission("reporting"));
    }

    #[test]
    fn toggle_flips_membership() {
        let mut role = Role::new("Nurse".to_string(), "Patient care access".to_string(), BTreeSet::new());
        assert!(role.toggle_permission("lab_results"));
        assert!(role.has_permission("lab_results"));
        assert!(!role.toggle_permission("lab_results"));
        assert!(role.permissions.is_empty());
    }
}

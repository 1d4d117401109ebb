use serde::{Deserialize, Serialize};

use crate::identifiers::Identifier;

labelled_enum! {
    /// Roles understood by the session access check.
    UserRole {
        Administrator => "administrator",
        Doctor => "doctor",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Identifier,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

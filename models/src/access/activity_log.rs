use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::badges::{Badge, BadgeVariant, HasBadge};
use crate::identifiers::Identifier;

labelled_enum! {
    /// Outcome of an audited user action.
    ActivityStatus {
        Success => "success",
        Failed => "failed",
        Warning => "warning",
    }
}

/// One line of the user activity audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogEntry {
    pub id: Identifier,
    pub user_id: String,
    pub user_name: String,
    /// Display role, e.g. "Doctor" or "Administrator".
    pub user_role: String,
    pub action: String,
    pub resource: String,
    pub timestamp: NaiveDateTime,
    pub ip_address: String,
    pub status: ActivityStatus,
    pub details: String,
}

impl HasBadge for ActivityLogEntry {
    fn badge(&self) -> Badge {
        let variant = match self.status {
            ActivityStatus::Success => BadgeVariant::Success,
            ActivityStatus::Failed => BadgeVariant::Destructive,
            ActivityStatus::Warning => BadgeVariant::Warning,
        };
        Badge::new(self.status.as_str(), variant)
    }
}

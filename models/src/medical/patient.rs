// models/src/medical/patient.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::badges::{Badge, BadgeVariant, HasBadge};
use crate::identifiers::Identifier;

labelled_enum! {
    /// Admission state shown in the patient list.
    PatientStatus {
        Active => "Active",
        Critical => "Critical",
        Discharged => "Discharged",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: Identifier,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub last_visit: NaiveDate,
    pub status: PatientStatus,
    pub condition: String,
    /// Attending doctor as a display name. Not checked against the doctor list.
    pub doctor: String,
}

impl HasBadge for Patient {
    fn badge(&self) -> Badge {
        let variant = match self.status {
            PatientStatus::Active => BadgeVariant::Success,
            PatientStatus::Critical => BadgeVariant::Destructive,
            PatientStatus::Discharged => BadgeVariant::Secondary,
        };
        Badge::new(self.status.as_str(), variant)
    }
}

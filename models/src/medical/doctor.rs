// models/src/medical/doctor.rs
use serde::{Deserialize, Serialize};

use crate::badges::{Badge, BadgeVariant, HasBadge};
use crate::identifiers::Identifier;

labelled_enum! {
    DoctorStatus {
        Available => "Available",
        InSurgery => "In Surgery",
        OnCall => "On Call",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: Identifier,
    pub name: String,
    pub specialization: String,
    pub department: String,
    /// Free text such as "15 years"; see [`Doctor::experience_years`].
    pub experience: String,
    pub phone: String,
    pub email: String,
    pub status: DoctorStatus,
    pub location: String,
    pub rating: f32,
    pub patients: u32,
}

impl Doctor {
    /// Leading digits of the experience text ("12 years", "15+ years" -> 12, 15).
    /// Returns `None` when the text does not start with a digit.
    pub fn experience_years(&self) -> Option<u32> {
        let text = self.experience.trim_start();
        let end = text.find(|c: char| !c.is_ascii_digit()).unwrap_or(text.len());
        text[..end].parse().ok()
    }
}

impl HasBadge for Doctor {
    fn badge(&self) -> Badge {
        let variant = match self.status {
            DoctorStatus::Available => BadgeVariant::Success,
            DoctorStatus::InSurgery => BadgeVariant::Destructive,
            DoctorStatus::OnCall => BadgeVariant::Accent,
        };
        Badge::new(self.status.as_str(), variant)
    }
}

// models/src/medical/appointment.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::badges::{Badge, BadgeVariant, HasBadge};
use crate::identifiers::Identifier;

labelled_enum! {
    AppointmentStatus {
        Scheduled => "Scheduled",
        InProgress => "In Progress",
        Completed => "Completed",
        Urgent => "Urgent",
        Cancelled => "Cancelled",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Identifier,
    /// Patient display name.
    pub patient: String,
    pub patient_id: Identifier,
    pub doctor: String,
    pub department: String,
    pub date: NaiveDate,
    /// Slot as shown on the schedule, e.g. "09:00 AM".
    pub time: String,
    /// Consultation, Follow-up, Pre-Surgery, Emergency, ...
    #[serde(rename = "type")]
    pub appointment_type: String,
    pub status: AppointmentStatus,
    pub room: String,
    pub notes: String,
}

impl Appointment {
    /// A scheduled appointment can be started.
    pub fn can_start(&self) -> bool {
        self.status == AppointmentStatus::Scheduled
    }

    /// An appointment in progress can be completed.
    pub fn can_complete(&self) -> bool {
        self.status == AppointmentStatus::InProgress
    }

    pub fn type_badge(&self) -> Badge {
        appointment_type_badge(&self.appointment_type)
    }
}

impl HasBadge for Appointment {
    fn badge(&self) -> Badge {
        let variant = match self.status {
            AppointmentStatus::Scheduled => BadgeVariant::Accent,
            AppointmentStatus::InProgress => BadgeVariant::Primary,
            AppointmentStatus::Completed => BadgeVariant::Success,
            AppointmentStatus::Urgent => BadgeVariant::Destructive,
            AppointmentStatus::Cancelled => BadgeVariant::Secondary,
        };
        Badge::new(self.status.as_str(), variant)
    }
}

pub fn appointment_type_badge(appointment_type: &str) -> Badge {
    let variant = match appointment_type {
        "Emergency" => BadgeVariant::Destructive,
        "Surgery" | "Pre-Surgery" => BadgeVariant::Accent,
        _ => BadgeVariant::Outline,
    };
    Badge::new(appointment_type, variant)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_badges_follow_clinical_urgency() {
        assert_eq!(appointment_type_badge("Emergency").variant, BadgeVariant::Destructive);
        assert_eq!(appointment_type_badge("Pre-Surgery").variant, BadgeVariant::Accent);
        assert_eq!(appointment_type_badge("Consultation").variant, BadgeVariant::Outline);
        assert_eq!(appointment_type_badge("Consultation").label, "Consultation");
    }

    #[test]
    fn status_serializes_as_display_label() {
        let json = serde_json::to_string(&AppointmentStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
    }
}

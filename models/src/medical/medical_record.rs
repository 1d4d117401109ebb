// models/src/medical/medical_record.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::badges::{Badge, BadgeVariant, HasBadge};
use crate::identifiers::Identifier;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub id: Identifier,
    pub patient_id: Identifier,
    pub patient_name: String,
    pub doctor: String,
    pub department: String,
    pub date: NaiveDate,
    /// Consultation, Surgery, Lab Results, Emergency, Follow-up
    #[serde(rename = "type")]
    pub record_type: String,
    pub diagnosis: String,
    pub notes: String,
    pub status: String,
}

impl HasBadge for MedicalRecord {
    /// Records are badged by type rather than status.
    fn badge(&self) -> Badge {
        record_type_badge(&self.record_type)
    }
}

pub fn record_type_badge(record_type: &str) -> Badge {
    let variant = match record_type {
        "Surgery" => BadgeVariant::Accent,
        "Lab Results" => BadgeVariant::Primary,
        "Emergency" => BadgeVariant::Destructive,
        "Follow-up" => BadgeVariant::Secondary,
        _ => BadgeVariant::Outline,
    };
    Badge::new(record_type, variant)
}

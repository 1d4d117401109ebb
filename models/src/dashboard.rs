use serde::{Deserialize, Serialize};

use crate::badges::{Badge, BadgeVariant};

/// Direction indicator on a stats card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

/// A headline figure on the dashboard (e.g. "Total Patients").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsCard {
    pub title: String,
    /// Pre-formatted value, e.g. "2,847".
    pub value: String,
    pub change: String,
    pub trend: Trend,
}

/// An entry in the dashboard's recent activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentActivity {
    pub id: u32,
    pub patient: String,
    pub action: String,
    pub doctor: String,
    /// Relative time text, e.g. "10 minutes ago".
    pub time: String,
    /// appointment, lab, prescription, emergency
    pub kind: String,
}

impl RecentActivity {
    /// Avatar fallback: first letter of each word of the patient name.
    pub fn initials(&self) -> String {
        self.patient
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }

    pub fn badge(&self) -> Badge {
        match self.kind.as_str() {
            "appointment" => Badge::new("Appointment", BadgeVariant::Secondary),
            "lab" => Badge::new("Lab", BadgeVariant::Accent),
            "prescription" => Badge::new("Prescription", BadgeVariant::Primary),
            "emergency" => Badge::new("Emergency", BadgeVariant::Destructive),
            _ => Badge::outline("General"),
        }
    }
}

/// One month of the analytics trend series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyStat {
    pub month: String,
    pub patients: u32,
    pub appointments: u32,
    /// Revenue in whole dollars.
    pub revenue: u64,
}

/// A department slice of the patient distribution chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentShare {
    pub name: String,
    /// Share of patients, in percent.
    pub value: u32,
    pub patients: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatisfactionPoint {
    pub month: String,
    /// Mean rating out of 5.
    pub satisfaction: f32,
}

// models/src/settings.rs
use serde::{Deserialize, Serialize};

/// Hospital identity shown on the general settings tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HospitalProfile {
    pub name: String,
    pub license_number: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
}

impl Default for HospitalProfile {
    fn default() -> Self {
        HospitalProfile {
            name: "MediCare Hospital".to_string(),
            license_number: "HSP-2024-001".to_string(),
            address: "123 Healthcare Ave, Medical City".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            email: "info@medicare.com".to_string(),
            website: "www.medicare.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationPreferences {
    pub email: bool,
    pub sms: bool,
    pub push: bool,
    /// Critical system and emergency alerts.
    pub alerts: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        NotificationPreferences {
            email: true,
            sms: false,
            push: true,
            alerts: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemSettings {
    pub auto_backup: bool,
    pub maintenance_mode: bool,
    pub data_retention_years: u32,
    pub session_timeout_minutes: u32,
}

impl Default for SystemSettings {
    fn default() -> Self {
        SystemSettings {
            auto_backup: true,
            maintenance_mode: false,
            data_retention_years: 5,
            session_timeout_minutes: 30,
        }
    }
}

// lib/src/config/config_structs.rs

use std::time::Duration;

use log::trace;
use serde::{Deserialize, Serialize};

use models::{HospitalProfile, NotificationPreferences, SystemSettings};

pub const DEFAULT_CONFIG_PATH_RELATIVE: &str = "./config/medicare.yaml";
pub const DEFAULT_PASSWORD_RESET_DELAY_MS: u64 = 2000;
pub const DEFAULT_TOAST_CAPACITY: usize = 50;

/// Simulated password reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordResetConfig {
    /// How long the "send reset link" request pretends to take.
    pub delay_ms: u64,
}

impl PasswordResetConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for PasswordResetConfig {
    fn default() -> Self {
        PasswordResetConfig {
            delay_ms: DEFAULT_PASSWORD_RESET_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Number of recent toasts kept in memory.
    pub capacity: usize,
}

impl Default for ToastConfig {
    fn default() -> Self {
        ToastConfig {
            capacity: DEFAULT_TOAST_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Start every page from the demo records. When false, lists start empty.
    pub load_demo_data: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        SeedConfig { load_demo_data: true }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub hospital: HospitalProfile,
    pub notifications: NotificationPreferences,
    pub system: SystemSettings,
    pub password_reset: PasswordResetConfig,
    pub toasts: ToastConfig,
    pub seed: SeedConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        trace!("Creating default AppConfig");
        AppConfig {
            hospital: HospitalProfile::default(),
            notifications: NotificationPreferences::default(),
            system: SystemSettings::default(),
            password_reset: PasswordResetConfig::default(),
            toasts: ToastConfig::default(),
            seed: SeedConfig::default(),
        }
    }
}

/// Wrapper matching the `medicare:` root key of the YAML file.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AppConfigWrapper {
    #[serde(default)]
    pub medicare: AppConfig,
}

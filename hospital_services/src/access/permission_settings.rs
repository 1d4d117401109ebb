// hospital_services/src/access/permission_settings.rs
use std::sync::Arc;

use log::info;
use tokio::sync::RwLock;

use logging_service::{NotificationSink, Toast};
use models::errors::{HospitalError, HospitalResult};
use models::{Identifier, PermissionSetting};

/// System-wide permission switches, grouped by category.
#[derive(Clone)]
pub struct PermissionSettingsService {
    settings: Arc<RwLock<Vec<PermissionSetting>>>,
    notifier: Arc<dyn NotificationSink>,
}

impl PermissionSettingsService {
    pub fn new(settings: Vec<PermissionSetting>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            settings: Arc::new(RwLock::new(settings)),
            notifier,
        }
    }

    pub async fn list(&self) -> Vec<PermissionSetting> {
        self.settings.read().await.clone()
    }

    /// Distinct categories in first-seen order.
    pub async fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for setting in self.settings.read().await.iter() {
            if !categories.contains(&setting.category) {
                categories.push(setting.category.clone());
            }
        }
        categories
    }

    pub async fn by_category(&self, category: &str) -> Vec<PermissionSetting> {
        self.settings
            .read()
            .await
            .iter()
            .filter(|s| s.category == category)
            .cloned()
            .collect()
    }

    pub async fn enabled_count(&self) -> usize {
        self.settings.read().await.iter().filter(|s| s.enabled).count()
    }

    /// Flips one switch and returns its new state. Nothing is saved until [`save`](Self::save).
    pub async fn toggle(&self, id: &Identifier) -> HospitalResult<bool> {
        let mut settings = self.settings.write().await;
        let setting = settings
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or_else(|| HospitalError::NotFound(id.clone()))?;
        Ok(setting.toggle())
    }

    pub async fn save(&self) {
        info!("Saving permission settings, {} enabled", self.enabled_count().await);
        self.notifier
            .notify(Toast::new("Permissions Updated", "Permission settings have been saved successfully."))
            .await;
    }
}

// hospital_services/src/settings/settings_service.rs
//! Settings page: hospital profile, notification preferences and system options.
//! Saving only updates the session copy and confirms with a toast.
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::RwLock;

use lib::config::AppConfig;
use lib::navigation::Page;
use lib::session::Session;
use logging_service::{NotificationSink, Toast};
use models::errors::{FieldError, HospitalError, HospitalResult, ValidationError};
use models::{HospitalProfile, NotificationPreferences, SystemSettings};

#[derive(Clone)]
pub struct SettingsService {
    profile: Arc<RwLock<HospitalProfile>>,
    notifications: Arc<RwLock<NotificationPreferences>>,
    system: Arc<RwLock<SystemSettings>>,
    notifier: Arc<dyn NotificationSink>,
}

impl SettingsService {
    pub fn new(config: &AppConfig, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            profile: Arc::new(RwLock::new(config.hospital.clone())),
            notifications: Arc::new(RwLock::new(config.notifications)),
            system: Arc::new(RwLock::new(config.system)),
            notifier,
        }
    }

    pub async fn profile(&self) -> HospitalProfile {
        self.profile.read().await.clone()
    }

    pub async fn notifications(&self) -> NotificationPreferences {
        *self.notifications.read().await
    }

    pub async fn system(&self) -> SystemSettings {
        *self.system.read().await
    }

    pub async fn save_profile(&self, profile: HospitalProfile) -> HospitalResult<()> {
        if profile.name.trim().is_empty() {
            return Err(ValidationError::FormRejected(vec![FieldError::new("name", "Hospital name is required")]).into());
        }
        debug!("Saving hospital profile {:?}", profile);
        *self.profile.write().await = profile;
        self.notifier
            .notify(Toast::new("Profile Updated", "Your profile settings have been saved successfully."))
            .await;
        Ok(())
    }

    pub async fn save_notifications(&self, preferences: NotificationPreferences) {
        if !preferences.alerts {
            warn!("Critical system alerts have been switched off");
        }
        *self.notifications.write().await = preferences;
        self.notifier
            .notify(Toast::new("Notification Settings Updated", "Your notification preferences have been saved."))
            .await;
    }

    pub async fn save_system(&self, settings: SystemSettings) -> HospitalResult<()> {
        let mut errors = Vec::new();
        if settings.data_retention_years == 0 {
            errors.push(FieldError::new("dataRetention", "Data retention must be at least 1 year"));
        }
        if settings.session_timeout_minutes == 0 {
            errors.push(FieldError::new("sessionTimeout", "Session timeout must be at least 1 minute"));
        }
        if !errors.is_empty() {
            return Err(ValidationError::FormRejected(errors).into());
        }
        if settings.maintenance_mode {
            warn!("Maintenance mode enabled");
        }
        *self.system.write().await = settings;
        self.notifier
            .notify(Toast::new("System Settings Updated", "System configuration has been updated successfully."))
            .await;
        Ok(())
    }

    pub async fn backup_now(&self) {
        info!("Manual backup requested");
        self.notifier
            .notify(Toast::new(
                "Backup Started",
                "Database backup is in progress. You'll be notified when complete.",
            ))
            .await;
    }

    pub async fn export_data(&self) {
        info!("Data export requested");
        self.notifier
            .notify(Toast::new("Data Export", "Preparing data export. Download will start shortly."))
            .await;
    }

    /// Shortcut buttons to the administration pages. Returns the page path.
    pub async fn open_admin_tool(&self, session: &Session, page: Page) -> HospitalResult<&'static str> {
        let (title, description) = match page {
            Page::UserRoles => ("User Roles", "Opening user role management interface."),
            Page::Permissions => ("Permissions", "Opening permission settings panel."),
            Page::UserActivity => ("Activity Logs", "Loading user activity logs."),
            other => {
                return Err(HospitalError::InvalidRequest(format!("{} is not an administration page", other)));
            }
        };
        if !session.can_open(page) {
            return Err(HospitalError::InvalidRequest(format!("access to {} requires an administrator", title)));
        }
        self.notifier.notify(Toast::new(title, description)).await;
        page.path()
            .ok_or_else(|| HospitalError::InvalidRequest(format!("{} has no route", title)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sink;
    use lib::seed_data::demo_user;
    use models::UserRole;

    #[tokio::test]
    async fn starts_from_config_values() {
        let service = SettingsService::new(&AppConfig::default(), sink());
        assert_eq!(service.profile().await.name, "MediCare Hospital");
        assert_eq!(service.system().await.session_timeout_minutes, 30);
        assert!(!service.notifications().await.sms);
    }

    #[tokio::test]
    async fn system_settings_reject_zero_values() {
        let log = sink();
        let service = SettingsService::new(&AppConfig::default(), log.clone());
        let settings = SystemSettings {
            data_retention_years: 0,
            session_timeout_minutes: 0,
            ..SystemSettings::default()
        };
        match service.save_system(settings).await.unwrap_err() {
            HospitalError::Validation(v) => assert_eq!(v.field_errors().len(), 2),
            other => panic!("unexpected error {:?}", other),
        }
        assert!(log.last().await.is_none());
        assert_eq!(service.system().await.data_retention_years, 5);
    }

    #[tokio::test]
    async fn saving_updates_the_session_copy() {
        let log = sink();
        let service = SettingsService::new(&AppConfig::default(), log.clone());
        let settings = SystemSettings {
            maintenance_mode: true,
            ..SystemSettings::default()
        };
        service.save_system(settings).await.unwrap();
        assert!(service.system().await.maintenance_mode);
        assert_eq!(log.last().await.unwrap().title, "System Settings Updated");

        service.backup_now().await;
        service.export_data().await;
        let titles: Vec<_> = log.recent().await.into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["System Settings Updated", "Backup Started", "Data Export"]);
    }

    #[tokio::test]
    async fn admin_tools_need_an_administrator() {
        let service = SettingsService::new(&AppConfig::default(), sink());
        let doctor = Session::new(Some(demo_user()));
        assert!(service.open_admin_tool(&doctor, Page::UserRoles).await.is_err());

        let admin = Session::new(Some(models::User { role: UserRole::Administrator, ..demo_user() }));
        assert_eq!(service.open_admin_tool(&admin, Page::UserActivity).await.unwrap(), "/user-activity");
        assert!(service.open_admin_tool(&admin, Page::Pharmacy).await.is_err());
    }
}

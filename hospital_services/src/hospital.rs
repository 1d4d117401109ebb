// hospital_services/src/hospital.rs
//! The application root: every page service plus the signed-in session,
//! built once from configuration.
use std::sync::Arc;

use anyhow::Result;
use log::{info, warn};
use tokio::sync::RwLock;

use lib::config::{load_app_config, AppConfig};
use lib::navigation::{resolve, Page};
use lib::seed_data;
use lib::session::Session;
use logging_service::{LogService, NotificationSink};
use models::errors::{HospitalError, HospitalResult};
use models::User;

use crate::access::{PermissionSettingsService, RoleService, UserActivityService};
use crate::analytics::{AnalyticsService, DashboardService};
use crate::appointment::AppointmentService;
use crate::doctor::DoctorService;
use crate::patient::PatientService;
use crate::pharmacy::PharmacyService;
use crate::records::RecordService;
use crate::settings::{PasswordResetService, SettingsService};

#[derive(Clone)]
pub struct Hospital {
    config: Arc<AppConfig>,
    session: Arc<RwLock<Session>>,
    pub patients: PatientService,
    pub doctors: DoctorService,
    pub appointments: AppointmentService,
    pub records: RecordService,
    pub pharmacy: PharmacyService,
    pub roles: RoleService,
    pub permissions: PermissionSettingsService,
    pub activity: UserActivityService,
    pub analytics: AnalyticsService,
    pub dashboard: DashboardService,
    pub settings: SettingsService,
    pub password_reset: PasswordResetService,
}

impl Hospital {
    /// Builds every service. Lists start empty unless `seed.load_demo_data` is set,
    /// in which case the demo user is also signed in.
    pub fn new(config: AppConfig, notifier: Arc<dyn NotificationSink>) -> Self {
        let seeded = config.seed.load_demo_data;
        if !seeded {
            warn!("Demo data disabled, starting with empty lists");
        }

        let hospital = Hospital {
            session: Arc::new(RwLock::new(Session::new(seeded.then(seed_data::demo_user)))),
            patients: PatientService::new(seed(seeded, seed_data::patients), notifier.clone()),
            doctors: DoctorService::new(seed(seeded, seed_data::doctors), notifier.clone()),
            appointments: AppointmentService::new(seed(seeded, seed_data::appointments), notifier.clone()),
            records: RecordService::new(seed(seeded, seed_data::medical_records), notifier.clone()),
            pharmacy: PharmacyService::new(seed(seeded, seed_data::medications), notifier.clone()),
            roles: RoleService::new(seed(seeded, seed_data::roles), notifier.clone()),
            permissions: PermissionSettingsService::new(seed(seeded, seed_data::permission_settings), notifier.clone()),
            activity: UserActivityService::new(seed(seeded, seed_data::activity_log)),
            analytics: AnalyticsService::new(
                seed(seeded, seed_data::monthly_stats),
                seed(seeded, seed_data::department_distribution),
                seed(seeded, seed_data::satisfaction_trend),
                notifier.clone(),
            ),
            dashboard: DashboardService::new(
                seed(seeded, seed_data::stats_cards),
                seed(seeded, seed_data::recent_activity),
                notifier.clone(),
            ),
            settings: SettingsService::new(&config, notifier.clone()),
            password_reset: PasswordResetService::new(config.password_reset.delay(), notifier),
            config: Arc::new(config),
        };
        info!("{} ready", hospital.config.hospital.name);
        hospital
    }

    /// Loads the YAML configuration and logs toasts to the terminal.
    pub async fn from_config_file(path: Option<&str>) -> Result<Self> {
        let config = load_app_config(path).await?;
        let notifier = Arc::new(LogService::new(config.toasts.capacity));
        Ok(Hospital::new(config, notifier))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub async fn current_user(&self) -> Option<User> {
        self.session.read().await.current_user().cloned()
    }

    pub async fn sign_in(&self, user: User) {
        self.session.write().await.set_current_user(Some(user));
    }

    pub async fn sign_out(&self) {
        self.session.write().await.sign_out();
    }

    pub async fn session(&self) -> Session {
        self.session.read().await.clone()
    }

    /// Resolves `path` and checks the session may open it.
    pub async fn navigate(&self, path: &str) -> HospitalResult<Page> {
        let page = resolve(path);
        if self.session.read().await.can_open(page) {
            Ok(page)
        } else {
            warn!("Access to {} denied", path);
            Err(HospitalError::InvalidRequest(format!("access to {} denied", path)))
        }
    }
}

fn seed<T>(seeded: bool, load: impl FnOnce() -> Vec<T>) -> Vec<T> {
    if seeded {
        load()
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sink;
    use lib::filtering::PatientFilter;
    use models::UserRole;

    #[tokio::test]
    async fn demo_data_is_loaded_by_default() {
        let hospital = Hospital::new(AppConfig::default(), sink());
        assert_eq!(hospital.patients.list(&PatientFilter::default()).await.len(), 4);
        assert_eq!(hospital.roles.list().await.len(), 4);
        assert_eq!(hospital.current_user().await.unwrap().name, "Dr. John Smith");
        assert_eq!(hospital.password_reset.delay().as_millis(), 2000);
    }

    #[tokio::test]
    async fn disabling_seed_starts_empty_and_signed_out() {
        let mut config = AppConfig::default();
        config.seed.load_demo_data = false;
        let hospital = Hospital::new(config, sink());
        assert!(hospital.patients.list(&PatientFilter::default()).await.is_empty());
        assert!(hospital.analytics.summary().top_department.is_none());
        assert!(hospital.current_user().await.is_none());
        assert!(hospital.navigate("/dashboard").await.is_err());
        assert_eq!(hospital.navigate("/").await.unwrap(), Page::Login);
    }

    #[tokio::test]
    async fn navigation_respects_roles() {
        let hospital = Hospital::new(AppConfig::default(), sink());
        assert_eq!(hospital.navigate("/pharmacy").await.unwrap(), Page::Pharmacy);
        assert_eq!(hospital.navigate("/nowhere").await.unwrap(), Page::NotFound);
        assert!(hospital.navigate("/user-roles").await.is_err());

        let admin = User { role: UserRole::Administrator, ..seed_data::demo_user() };
        hospital.sign_in(admin).await;
        assert_eq!(hospital.navigate("/user-roles").await.unwrap(), Page::UserRoles);

        hospital.sign_out().await;
        assert!(hospital.session().await.current_user().is_none());
    }

    #[tokio::test]
    async fn services_share_one_notifier() {
        let log = sink();
        let hospital = Hospital::new(AppConfig::default(), log.clone());
        hospital.settings.backup_now().await;
        hospital.analytics.refresh().await;
        assert_eq!(log.recent().await.len(), 2);
    }

    #[tokio::test]
    async fn missing_config_file_falls_back_to_defaults() {
        let hospital = Hospital::from_config_file(Some("/nonexistent/medicare.yaml")).await.unwrap();
        assert_eq!(hospital.config().hospital.name, "MediCare Hospital");
    }
}

// hospital_services/src/access/user_activity.rs
use std::sync::Arc;

use log::info;
use serde::Serialize;
use tokio::sync::RwLock;

use lib::filtering::{filter_records, ActivityFilter};
use models::errors::HospitalResult;
use models::{ActivityLogEntry, ActivityStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ActivityStats {
    pub total: usize,
    pub success: usize,
    pub failed: usize,
    pub warning: usize,
}

/// Read-only audit trail of user actions.
#[derive(Clone)]
pub struct UserActivityService {
    entries: Arc<RwLock<Vec<ActivityLogEntry>>>,
}

impl UserActivityService {
    pub fn new(entries: Vec<ActivityLogEntry>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    pub async fn list(&self, filter: &ActivityFilter) -> Vec<ActivityLogEntry> {
        let entries = self.entries.read().await;
        filter_records(entries.as_slice(), &filter.to_spec())
    }

    /// Counts over the whole log, independent of any filter.
    pub async fn stats(&self) -> ActivityStats {
        let entries = self.entries.read().await;
        let count = |status: ActivityStatus| entries.iter().filter(|e| e.status == status).count();
        ActivityStats {
            total: entries.len(),
            success: count(ActivityStatus::Success),
            failed: count(ActivityStatus::Failed),
            warning: count(ActivityStatus::Warning),
        }
    }

    /// The entries matching `filter`, as a JSON array.
    pub async fn export(&self, filter: &ActivityFilter) -> HospitalResult<String> {
        let entries = self.list(filter).await;
        let json = serde_json::to_string_pretty(&entries)?;
        info!("Exported {} activity log entries", entries.len());
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib::seed_data;
    use serde_json::Value;

    #[tokio::test]
    async fn stats_count_statuses() {
        let service = UserActivityService::new(seed_data::activity_log());
        assert_eq!(
            service.stats().await,
            ActivityStats { total: 6, success: 4, failed: 1, warning: 1 }
        );
    }

    #[tokio::test]
    async fn status_and_search_combine() {
        let service = UserActivityService::new(seed_data::activity_log());
        let filter = ActivityFilter {
            query: "login".to_string(),
            status: "failed".to_string(),
            ..Default::default()
        };
        let found = service.list(&filter).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].user_name, "Nurse Mary");
    }

    #[tokio::test]
    async fn export_contains_only_filtered_entries() {
        let service = UserActivityService::new(seed_data::activity_log());
        let filter = ActivityFilter { role: "receptionist".to_string(), ..Default::default() };
        let json: Value = serde_json::from_str(&service.export(&filter).await.unwrap()).unwrap();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["userName"], "Lisa Receptionist");
        assert_eq!(entries[0]["status"], "success");
    }

    #[tokio::test]
    async fn all_sentinel_keeps_everything() {
        let service = UserActivityService::new(seed_data::activity_log());
        let filter = ActivityFilter {
            role: "all".to_string(),
            status: "all".to_string(),
            ..Default::default()
        };
        assert_eq!(service.list(&filter).await.len(), 6);
    }
}

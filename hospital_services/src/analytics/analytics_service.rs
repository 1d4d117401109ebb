// hospital_services/src/analytics/analytics_service.rs
use std::sync::Arc;

use log::info;
use serde::Serialize;

use logging_service::{NotificationSink, Toast};
use models::{DepartmentShare, MonthlyStat, SatisfactionPoint};

/// Headline figures over the whole reporting period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsSummary {
    pub total_patients: u32,
    pub total_appointments: u32,
    pub total_revenue: u64,
    pub average_monthly_revenue: u64,
    /// Mean of the monthly satisfaction ratings, 0.0 when there are none.
    pub average_satisfaction: f32,
    pub top_department: Option<String>,
}

#[derive(Clone)]
pub struct AnalyticsService {
    monthly: Arc<Vec<MonthlyStat>>,
    departments: Arc<Vec<DepartmentShare>>,
    satisfaction: Arc<Vec<SatisfactionPoint>>,
    notifier: Arc<dyn NotificationSink>,
}

impl AnalyticsService {
    pub fn new(
        monthly: Vec<MonthlyStat>,
        departments: Vec<DepartmentShare>,
        satisfaction: Vec<SatisfactionPoint>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            monthly: Arc::new(monthly),
            departments: Arc::new(departments),
            satisfaction: Arc::new(satisfaction),
            notifier,
        }
    }

    pub fn monthly_stats(&self) -> &[MonthlyStat] {
        &self.monthly
    }

    pub fn department_distribution(&self) -> &[DepartmentShare] {
        &self.departments
    }

    pub fn satisfaction_trend(&self) -> &[SatisfactionPoint] {
        &self.satisfaction
    }

    pub fn summary(&self) -> AnalyticsSummary {
        let total_revenue: u64 = self.monthly.iter().map(|m| m.revenue).sum();
        let average_satisfaction = if self.satisfaction.is_empty() {
            0.0
        } else {
            self.satisfaction.iter().map(|s| s.satisfaction).sum::<f32>() / self.satisfaction.len() as f32
        };

        AnalyticsSummary {
            total_patients: self.monthly.iter().map(|m| m.patients).sum(),
            total_appointments: self.monthly.iter().map(|m| m.appointments).sum(),
            total_revenue,
            average_monthly_revenue: total_revenue.checked_div(self.monthly.len() as u64).unwrap_or(0),
            average_satisfaction,
            top_department: self
                .departments
                .iter()
                .max_by_key(|d| d.patients)
                .map(|d| d.name.clone()),
        }
    }

    pub async fn export_report(&self) {
        info!("Exporting analytics report for {} month(s)", self.monthly.len());
        self.notifier
            .notify(Toast::new(
                "Exporting Report",
                "Analytics report is being generated and will be downloaded shortly.",
            ))
            .await;
    }

    pub async fn refresh(&self) {
        self.notifier
            .notify(Toast::new(
                "Refreshing Data",
                "Analytics data has been refreshed with the latest information.",
            ))
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sink;
    use lib::seed_data;

    fn seeded(notifier: Arc<dyn NotificationSink>) -> AnalyticsService {
        AnalyticsService::new(
            seed_data::monthly_stats(),
            seed_data::department_distribution(),
            seed_data::satisfaction_trend(),
            notifier,
        )
    }

    #[test]
    fn summary_totals_the_seed_series() {
        let summary = seeded(sink()).summary();
        assert_eq!(summary.total_patients, 1860);
        assert_eq!(summary.total_appointments, 2470);
        assert_eq!(summary.total_revenue, 344_000);
        assert_eq!(summary.average_monthly_revenue, 57_333);
        assert!((summary.average_satisfaction - 4.35).abs() < 0.01);
        assert_eq!(summary.top_department.as_deref(), Some("Cardiology"));
    }

    #[test]
    fn empty_series_summarise_to_zero() {
        let summary = AnalyticsService::new(vec![], vec![], vec![], sink()).summary();
        assert_eq!(summary.total_revenue, 0);
        assert_eq!(summary.average_monthly_revenue, 0);
        assert_eq!(summary.average_satisfaction, 0.0);
        assert!(summary.top_department.is_none());
    }

    #[tokio::test]
    async fn export_and_refresh_emit_toasts() {
        let log = sink();
        let service = seeded(log.clone());
        service.export_report().await;
        service.refresh().await;
        let titles: Vec<_> = log.recent().await.into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["Exporting Report", "Refreshing Data"]);
    }
}

// hospital_services/src/analytics/dashboard_service.rs
use std::sync::Arc;

use serde::Serialize;

use lib::navigation::Page;
use logging_service::{NotificationSink, Toast};
use models::{Badge, RecentActivity, StatsCard};

/// Shortcut buttons on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuickAction {
    AddPatient,
    ScheduleAppointment,
    AddDoctor,
    ViewReports,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        QuickAction::AddPatient,
        QuickAction::ScheduleAppointment,
        QuickAction::AddDoctor,
        QuickAction::ViewReports,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::AddPatient => "Add Patient",
            QuickAction::ScheduleAppointment => "Schedule Appointment",
            QuickAction::AddDoctor => "Add Doctor",
            QuickAction::ViewReports => "View Reports",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            QuickAction::AddPatient => "Opening patient registration form...",
            QuickAction::ScheduleAppointment => "Opening appointment booking form...",
            QuickAction::AddDoctor => "Opening doctor registration form...",
            QuickAction::ViewReports => "Opening analytics dashboard...",
        }
    }

    pub fn target(&self) -> Page {
        match self {
            QuickAction::AddPatient => Page::Patients,
            QuickAction::ScheduleAppointment => Page::Appointments,
            QuickAction::AddDoctor => Page::Doctors,
            QuickAction::ViewReports => Page::Analytics,
        }
    }
}

/// A recent activity row with its avatar initials and badge resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityRow {
    pub activity: RecentActivity,
    pub initials: String,
    pub badge: Badge,
}

#[derive(Clone)]
pub struct DashboardService {
    cards: Arc<Vec<StatsCard>>,
    activity: Arc<Vec<RecentActivity>>,
    notifier: Arc<dyn NotificationSink>,
}

impl DashboardService {
    pub fn new(cards: Vec<StatsCard>, activity: Vec<RecentActivity>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            cards: Arc::new(cards),
            activity: Arc::new(activity),
            notifier,
        }
    }

    pub fn stats_cards(&self) -> &[StatsCard] {
        &self.cards
    }

    pub fn recent_activity(&self) -> Vec<ActivityRow> {
        self.activity
            .iter()
            .map(|a| ActivityRow {
                initials: a.initials(),
                badge: a.badge(),
                activity: a.clone(),
            })
            .collect()
    }

    /// Announces the shortcut and returns the page it leads to.
    pub async fn quick_action(&self, action: QuickAction) -> Page {
        self.notifier.notify(Toast::new(action.label(), action.description())).await;
        action.target()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sink;
    use lib::seed_data;
    use models::{BadgeVariant, Trend};

    fn seeded(notifier: Arc<dyn NotificationSink>) -> DashboardService {
        DashboardService::new(seed_data::stats_cards(), seed_data::recent_activity(), notifier)
    }

    #[test]
    fn cards_come_from_seed() {
        let service = seeded(sink());
        let cards = service.stats_cards();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].value, "2,847");
        assert_eq!(cards[3].trend, Trend::Down);
    }

    #[test]
    fn activity_rows_carry_initials_and_badges() {
        let rows = seeded(sink()).recent_activity();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].initials, "JS");
        assert_eq!(rows[0].badge.label, "Appointment");
        assert_eq!(rows[3].badge.variant, BadgeVariant::Destructive);
    }

    #[tokio::test]
    async fn quick_actions_toast_and_navigate() {
        let log = sink();
        let service = seeded(log.clone());
        for action in QuickAction::ALL {
            let page = service.quick_action(action).await;
            assert!(page.path().is_some());
        }
        let toasts = log.recent().await;
        assert_eq!(toasts.len(), 4);
        assert_eq!(toasts[3].title, "View Reports");
        assert_eq!(toasts[3].description, "Opening analytics dashboard...");
        assert_eq!(service.quick_action(QuickAction::AddDoctor).await, Page::Doctors);
    }
}

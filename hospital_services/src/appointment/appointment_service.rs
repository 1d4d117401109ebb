// hospital_services/src/appointment/appointment_service.rs
//! Appointment scheduling: list, booking dialog and status-aware row actions.
use std::sync::Arc;

use log::{info, warn};
use serde::Serialize;
use tokio::sync::RwLock;

use lib::filtering::{filter_records, AppointmentFilter};
use logging_service::{NotificationSink, Toast};
use models::errors::{HospitalError, HospitalResult};
use models::{Appointment, AppointmentStatus, Identifier};
use schema::{AppointmentForm, AppointmentFormData, FormSchema};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AppointmentStats {
    pub total: usize,
    pub scheduled: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub urgent: usize,
    pub cancelled: usize,
}

/// Row action offered for an appointment, given its status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AppointmentAction {
    Start,
    Complete,
}

#[derive(Clone)]
pub struct AppointmentService {
    appointments: Arc<RwLock<Vec<Appointment>>>,
    notifier: Arc<dyn NotificationSink>,
}

impl AppointmentService {
    pub fn new(appointments: Vec<Appointment>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            appointments: Arc::new(RwLock::new(appointments)),
            notifier,
        }
    }

    pub async fn list(&self, filter: &AppointmentFilter) -> Vec<Appointment> {
        let appointments = self.appointments.read().await;
        filter_records(appointments.as_slice(), &filter.to_spec())
    }

    pub async fn get(&self, id: &Identifier) -> HospitalResult<Appointment> {
        self.appointments
            .read()
            .await
            .iter()
            .find(|a| &a.id == id)
            .cloned()
            .ok_or_else(|| HospitalError::NotFound(id.clone()))
    }

    pub fn available_action(appointment: &Appointment) -> Option<AppointmentAction> {
        if appointment.can_start() {
            Some(AppointmentAction::Start)
        } else if appointment.can_complete() {
            Some(AppointmentAction::Complete)
        } else {
            None
        }
    }

    pub async fn book(&self, form: &AppointmentFormData) -> HospitalResult<()> {
        AppointmentForm::validate_data(form)?;
        info!("Booking submitted for {} with {} on {}", form.patient, form.doctor, form.date);
        self.notifier
            .notify(Toast::new("Appointment Booked", "New appointment has been successfully scheduled."))
            .await;
        Ok(())
    }

    /// Moves a scheduled appointment to "In Progress".
    pub async fn start(&self, id: &Identifier) -> HospitalResult<Appointment> {
        let updated = self
            .transition(id, AppointmentStatus::InProgress, Appointment::can_start)
            .await?;
        self.notifier
            .notify(Toast::new("Starting Appointment", format!("Beginning consultation with {}", updated.patient)))
            .await;
        Ok(updated)
    }

    /// Moves an in-progress appointment to "Completed".
    pub async fn complete(&self, id: &Identifier) -> HospitalResult<Appointment> {
        let updated = self
            .transition(id, AppointmentStatus::Completed, Appointment::can_complete)
            .await?;
        self.notifier
            .notify(Toast::new(
                "Appointment Completed",
                format!("Consultation with {} has been completed.", updated.patient),
            ))
            .await;
        Ok(updated)
    }

    pub async fn reschedule(&self, id: &Identifier) -> HospitalResult<Appointment> {
        let appointment = self.get(id).await?;
        self.notifier
            .notify(Toast::new("Rescheduling", format!("Rescheduling appointment for {}", appointment.patient)))
            .await;
        Ok(appointment)
    }

    pub async fn view(&self, id: &Identifier) -> HospitalResult<Appointment> {
        let appointment = self.get(id).await?;
        self.notifier
            .notify(Toast::new(
                "View Appointment",
                format!("Opening appointment details for {}", appointment.patient),
            ))
            .await;
        Ok(appointment)
    }

    pub async fn stats(&self) -> AppointmentStats {
        let appointments = self.appointments.read().await;
        let count = |status: AppointmentStatus| appointments.iter().filter(|a| a.status == status).count();
        AppointmentStats {
            total: appointments.len(),
            scheduled: count(AppointmentStatus::Scheduled),
            in_progress: count(AppointmentStatus::InProgress),
            completed: count(AppointmentStatus::Completed),
            urgent: count(AppointmentStatus::Urgent),
            cancelled: count(AppointmentStatus::Cancelled),
        }
    }

    async fn transition(
        &self,
        id: &Identifier,
        to: AppointmentStatus,
        allowed: fn(&Appointment) -> bool,
    ) -> HospitalResult<Appointment> {
        let mut appointments = self.appointments.write().await;
        let appointment = appointments
            .iter_mut()
            .find(|a| &a.id == id)
            .ok_or_else(|| HospitalError::NotFound(id.clone()))?;
        if !allowed(appointment) {
            warn!("Appointment {} cannot move from {} to {}", id, appointment.status, to);
            return Err(HospitalError::InvalidRequest(format!(
                "appointment {} is {} and cannot become {}",
                id, appointment.status, to
            )));
        }
        appointment.status = to;
        Ok(appointment.clone())
    }
}

// hospital_services/src/doctor/doctor_service.rs
use std::sync::Arc;

use log::info;
use serde::Serialize;
use tokio::sync::RwLock;

use lib::filtering::{filter_records, DoctorFilter};
use logging_service::{NotificationSink, Toast};
use models::errors::{HospitalError, HospitalResult};
use models::{Doctor, DoctorStatus, Identifier};
use schema::{DoctorForm, DoctorFormData, FormSchema};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DoctorStats {
    pub total: usize,
    pub available: usize,
    pub in_surgery: usize,
    pub on_call: usize,
    /// Mean rating, 0 when there are no doctors.
    pub average_rating: f32,
}

#[derive(Clone)]
pub struct DoctorService {
    doctors: Arc<RwLock<Vec<Doctor>>>,
    notifier: Arc<dyn NotificationSink>,
}

impl DoctorService {
    pub fn new(doctors: Vec<Doctor>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            doctors: Arc::new(RwLock::new(doctors)),
            notifier,
        }
    }

    pub async fn list(&self, filter: &DoctorFilter) -> Vec<Doctor> {
        let doctors = self.doctors.read().await;
        filter_records(doctors.as_slice(), &filter.to_spec())
    }

    pub async fn get(&self, id: &Identifier) -> HospitalResult<Doctor> {
        self.doctors
            .read()
            .await
            .iter()
            .find(|d| &d.id == id)
            .cloned()
            .ok_or_else(|| HospitalError::NotFound(id.clone()))
    }

    /// Departments offered by the department selector, first-seen order.
    pub async fn departments(&self) -> Vec<String> {
        let mut departments: Vec<String> = Vec::new();
        for doctor in self.doctors.read().await.iter() {
            if !departments.contains(&doctor.department) {
                departments.push(doctor.department.clone());
            }
        }
        departments
    }

    pub async fn register(&self, form: &DoctorFormData) -> HospitalResult<()> {
        DoctorForm::validate_data(form)?;
        info!("Doctor registration submitted for {}", form.name);
        self.notifier
            .notify(Toast::new("Doctor Added", "New doctor has been successfully registered."))
            .await;
        Ok(())
    }

    pub async fn contact(&self, id: &Identifier) -> HospitalResult<Doctor> {
        let doctor = self.get(id).await?;
        self.notifier
            .notify(Toast::new("Contacting Doctor", format!("Calling {} at {}", doctor.name, doctor.phone)))
            .await;
        Ok(doctor)
    }

    pub async fn view_profile(&self, id: &Identifier) -> HospitalResult<Doctor> {
        let doctor = self.get(id).await?;
        self.notifier
            .notify(Toast::new("Doctor Profile", format!("Viewing {}'s complete profile", doctor.name)))
            .await;
        Ok(doctor)
    }

    /// The edit dialog only confirms; the record is left unchanged.
    pub async fn update(&self, id: &Identifier, form: &DoctorFormData) -> HospitalResult<Doctor> {
        let doctor = self.get(id).await?;
        DoctorForm::validate_data(form)?;
        self.notifier
            .notify(Toast::new(
                "Doctor Updated",
                format!("{}'s information has been updated successfully.", doctor.name),
            ))
            .await;
        Ok(doctor)
    }

    pub async fn stats(&self) -> DoctorStats {
        let doctors = self.doctors.read().await;
        let count = |status: DoctorStatus| doctors.iter().filter(|d| d.status == status).count();
        let average_rating = if doctors.is_empty() {
            0.0
        } else {
            doctors.iter().map(|d| d.rating).sum::<f32>() / doctors.len() as f32
        };
        DoctorStats {
            total: doctors.len(),
            available: count(DoctorStatus::Available),
            in_surgery: count(DoctorStatus::InSurgery),
            on_call: count(DoctorStatus::OnCall),
            average_rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sink;
    use lib::seed_data;

    #[tokio::test]
    async fn contact_toasts_name_and_phone() {
        let log = sink();
        let service = DoctorService::new(seed_data::doctors(), log.clone());
        service.contact(&Identifier::seed("D004")).await.unwrap();
        assert_eq!(
            log.last().await.unwrap().description,
            "Calling Dr. James Thompson at +1 (555) 444-5555"
        );
    }

    #[tokio::test]
    async fn department_and_status_filters_combine() {
        let service = DoctorService::new(seed_data::doctors(), sink());
        let filter = DoctorFilter {
            department: "Emergency".to_string(),
            status: "On Call".to_string(),
            ..Default::default()
        };
        let found = service.list(&filter).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "D004");

        let filter = DoctorFilter { experience: "junior".to_string(), ..Default::default() };
        assert!(service.list(&filter).await.is_empty());
    }

    #[tokio::test]
    async fn departments_keep_first_seen_order() {
        let service = DoctorService::new(seed_data::doctors(), sink());
        assert_eq!(
            service.departments().await,
            vec!["Heart Institute", "Internal Medicine", "Surgical", "Emergency"]
        );
    }

    #[tokio::test]
    async fn stats_cover_every_status() {
        let service = DoctorService::new(seed_data::doctors(), sink());
        let stats = service.stats().await;
        assert_eq!((stats.total, stats.available, stats.in_surgery, stats.on_call), (4, 2, 1, 1));
        assert!((stats.average_rating - 4.825).abs() < 1e-3);
    }

    #[tokio::test]
    async fn empty_roster_has_zero_rating() {
        let service = DoctorService::new(Vec::new(), sink());
        assert_eq!(service.stats().await.average_rating, 0.0);
    }
}

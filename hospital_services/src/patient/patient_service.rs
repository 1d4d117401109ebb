// hospital_services/src/patient/patient_service.rs
//! Patient service: patient list, registration dialog and row actions.
use std::sync::Arc;

use log::{debug, info};
use serde::Serialize;
use tokio::sync::RwLock;

use lib::filtering::{filter_records, PatientFilter};
use logging_service::{NotificationSink, Toast};
use models::errors::{HospitalError, HospitalResult};
use models::{Identifier, Patient, PatientStatus};
use schema::{FormSchema, PatientForm, PatientFormData};

/// Head counts shown above the patient table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PatientStats {
    pub total: usize,
    pub active: usize,
    pub critical: usize,
    pub discharged: usize,
}

#[derive(Clone)]
pub struct PatientService {
    patients: Arc<RwLock<Vec<Patient>>>,
    notifier: Arc<dyn NotificationSink>,
}

impl PatientService {
    pub fn new(patients: Vec<Patient>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            patients: Arc::new(RwLock::new(patients)),
            notifier,
        }
    }

    pub async fn list(&self, filter: &PatientFilter) -> Vec<Patient> {
        let patients = self.patients.read().await;
        filter_records(patients.as_slice(), &filter.to_spec())
    }

    pub async fn get(&self, id: &Identifier) -> HospitalResult<Patient> {
        self.patients
            .read()
            .await
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| HospitalError::NotFound(id.clone()))
    }

    /// Validates the registration dialog. The patient is not added to the list.
    pub async fn register(&self, form: &PatientFormData) -> HospitalResult<()> {
        PatientForm::validate_data(form)?;
        info!("Registration submitted for patient {}", form.name);
        self.notifier
            .notify(Toast::new("Patient Registered", "New patient has been successfully registered."))
            .await;
        Ok(())
    }

    pub async fn view(&self, id: &Identifier) -> HospitalResult<Patient> {
        let patient = self.get(id).await?;
        debug!("Opening patient {}", patient.id);
        self.notifier
            .notify(Toast::new("View Patient", format!("Opening detailed profile for {}", patient.name)))
            .await;
        Ok(patient)
    }

    pub async fn edit(&self, id: &Identifier) -> HospitalResult<Patient> {
        let patient = self.get(id).await?;
        self.notifier
            .notify(Toast::new("Edit Patient", format!("Editing profile for {}", patient.name)))
            .await;
        Ok(patient)
    }

    pub async fn stats(&self) -> PatientStats {
        let patients = self.patients.read().await;
        let count = |status: PatientStatus| patients.iter().filter(|p| p.status == status).count();
        PatientStats {
            total: patients.len(),
            active: count(PatientStatus::Active),
            critical: count(PatientStatus::Critical),
            discharged: count(PatientStatus::Discharged),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sink;
    use lib::seed_data;

    #[tokio::test]
    async fn search_smith_returns_p001() {
        let service = PatientService::new(seed_data::patients(), sink());
        let filter = PatientFilter { query: "smith".to_string(), ..Default::default() };
        let found = service.list(&filter).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "P001");
    }

    #[tokio::test]
    async fn unknown_patient_is_not_found() {
        let service = PatientService::new(seed_data::patients(), sink());
        let err = service.get(&Identifier::seed("P999")).await.unwrap_err();
        assert_eq!(err, HospitalError::NotFound(Identifier::seed("P999")));
    }

    #[tokio::test]
    async fn view_toasts_the_patient_name() {
        let log = sink();
        let service = PatientService::new(seed_data::patients(), log.clone());
        service.view(&Identifier::seed("P004")).await.unwrap();
        let toast = log.last().await.unwrap();
        assert_eq!(toast.title, "View Patient");
        assert_eq!(toast.description, "Opening detailed profile for Maria Garcia");
    }

    #[tokio::test]
    async fn registration_is_acknowledged_but_not_stored() {
        let log = sink();
        let service = PatientService::new(seed_data::patients(), log.clone());
        let form = PatientFormData {
            name: "Ana Lopez".to_string(),
            age: 51,
            gender: "Female".to_string(),
            phone: "+1 (555) 999-0000".to_string(),
            email: String::new(),
            condition: "Asthma".to_string(),
        };
        service.register(&form).await.unwrap();
        assert_eq!(log.last().await.unwrap().title, "Patient Registered");
        assert_eq!(service.stats().await.total, 4);
    }

    #[tokio::test]
    async fn invalid_registration_raises_no_toast() {
        let log = sink();
        let service = PatientService::new(seed_data::patients(), log.clone());
        let err = service.register(&PatientFormData::default()).await.unwrap_err();
        assert!(matches!(err, HospitalError::Validation(_)));
        assert!(log.recent().await.is_empty());
    }

    #[tokio::test]
    async fn stats_count_each_status() {
        let service = PatientService::new(seed_data::patients(), sink());
        assert_eq!(
            service.stats().await,
            PatientStats { total: 4, active: 2, critical: 1, discharged: 1 }
        );
    }
}

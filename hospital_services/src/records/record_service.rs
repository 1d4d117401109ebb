// hospital_services/src/records/record_service.rs
use std::sync::Arc;

use tokio::sync::RwLock;

use lib::filtering::{filter_records, RecordFilter};
use logging_service::{NotificationSink, Toast};
use models::errors::{HospitalError, HospitalResult};
use models::{Identifier, MedicalRecord};

#[derive(Clone)]
pub struct RecordService {
    records: Arc<RwLock<Vec<MedicalRecord>>>,
    notifier: Arc<dyn NotificationSink>,
}

impl RecordService {
    pub fn new(records: Vec<MedicalRecord>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
            notifier,
        }
    }

    pub async fn list(&self, filter: &RecordFilter) -> Vec<MedicalRecord> {
        let records = self.records.read().await;
        filter_records(records.as_slice(), &filter.to_spec())
    }

    pub async fn get(&self, id: &Identifier) -> HospitalResult<MedicalRecord> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| &r.id == id)
            .cloned()
            .ok_or_else(|| HospitalError::NotFound(id.clone()))
    }

    /// Every record of one patient, in list order.
    pub async fn for_patient(&self, patient_id: &Identifier) -> Vec<MedicalRecord> {
        self.records
            .read()
            .await
            .iter()
            .filter(|r| &r.patient_id == patient_id)
            .cloned()
            .collect()
    }

    pub async fn view(&self, id: &Identifier) -> HospitalResult<MedicalRecord> {
        let record = self.get(id).await?;
        self.notifier
            .notify(Toast::new("View Record", format!("Opening medical record for {}", record.patient_name)))
            .await;
        Ok(record)
    }

    pub async fn edit(&self, id: &Identifier) -> HospitalResult<MedicalRecord> {
        let record = self.get(id).await?;
        self.notifier
            .notify(Toast::new("Edit Record", format!("Editing medical record for {}", record.patient_name)))
            .await;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sink;
    use lib::seed_data;

    #[tokio::test]
    async fn doctor_selector_matches_part_of_the_name() {
        let service = RecordService::new(seed_data::medical_records(), sink());
        let filter = RecordFilter { doctor: "THOMPSON".to_string(), ..Default::default() };
        let found = service.list(&filter).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].diagnosis, "Fractured Arm");
    }

    #[tokio::test]
    async fn search_covers_patient_id() {
        let service = RecordService::new(seed_data::medical_records(), sink());
        let filter = RecordFilter { query: "p002".to_string(), ..Default::default() };
        assert_eq!(service.list(&filter).await[0].id, "R002");
    }

    #[tokio::test]
    async fn edit_names_the_patient() {
        let log = sink();
        let service = RecordService::new(seed_data::medical_records(), log.clone());
        service.edit(&Identifier::seed("R003")).await.unwrap();
        assert_eq!(log.last().await.unwrap().description, "Editing medical record for Robert Johnson");
        assert!(service.view(&Identifier::seed("R404")).await.is_err());
    }

    #[tokio::test]
    async fn records_by_patient() {
        let service = RecordService::new(seed_data::medical_records(), sink());
        let records = service.for_patient(&Identifier::seed("P001")).await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].record_type, "Consultation");
    }
}

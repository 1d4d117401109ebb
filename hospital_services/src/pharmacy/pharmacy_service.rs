// hospital_services/src/pharmacy/pharmacy_service.rs
use std::sync::Arc;

use log::info;
use serde::Serialize;
use tokio::sync::RwLock;

use lib::filtering::{filter_records, MedicationFilter, StockLevel};
use logging_service::{NotificationSink, Toast};
use models::errors::{HospitalError, HospitalResult};
use models::{Identifier, Medication, MedicationStatus};
use schema::{FormSchema, MedicationForm, MedicationFormData};

/// Summary cards above the inventory table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct InventoryStats {
    pub total: usize,
    pub available: usize,
    /// Medications marked "Low Stock".
    pub low_stock: usize,
    /// Medications whose stock falls in the low bucket, whatever their status.
    pub below_threshold: usize,
    pub out_of_stock: usize,
    pub total_value: f64,
}

#[derive(Clone)]
pub struct PharmacyService {
    medications: Arc<RwLock<Vec<Medication>>>,
    notifier: Arc<dyn NotificationSink>,
}

impl PharmacyService {
    pub fn new(medications: Vec<Medication>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            medications: Arc::new(RwLock::new(medications)),
            notifier,
        }
    }

    pub async fn list(&self, filter: &MedicationFilter) -> Vec<Medication> {
        let medications = self.medications.read().await;
        filter_records(medications.as_slice(), &filter.to_spec())
    }

    pub async fn get(&self, id: &Identifier) -> HospitalResult<Medication> {
        self.medications
            .read()
            .await
            .iter()
            .find(|m| &m.id == id)
            .cloned()
            .ok_or_else(|| HospitalError::NotFound(id.clone()))
    }

    pub async fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for medication in self.medications.read().await.iter() {
            if !categories.contains(&medication.category) {
                categories.push(medication.category.clone());
            }
        }
        categories
    }

    pub async fn add_medication(&self, form: &MedicationFormData) -> HospitalResult<()> {
        MedicationForm::validate_data(form)?;
        info!("Medication {} submitted with stock {}", form.name, form.stock);
        self.notifier
            .notify(Toast::new(
                "Medication Added",
                "New medication has been successfully added to inventory.",
            ))
            .await;
        Ok(())
    }

    pub async fn view(&self, id: &Identifier) -> HospitalResult<Medication> {
        let medication = self.get(id).await?;
        self.notifier
            .notify(Toast::new("View Medication", format!("Opening details for {}", medication.name)))
            .await;
        Ok(medication)
    }

    pub async fn edit(&self, id: &Identifier) -> HospitalResult<Medication> {
        let medication = self.get(id).await?;
        self.notifier
            .notify(Toast::new("Edit Medication", format!("Editing details for {}", medication.name)))
            .await;
        Ok(medication)
    }

    pub async fn stats(&self) -> InventoryStats {
        let medications = self.medications.read().await;
        let count = |status: MedicationStatus| medications.iter().filter(|m| m.status == status).count();
        InventoryStats {
            total: medications.len(),
            available: count(MedicationStatus::Available),
            low_stock: count(MedicationStatus::LowStock),
            below_threshold: medications
                .iter()
                .filter(|m| StockLevel::of(m.stock) == StockLevel::Low)
                .count(),
            out_of_stock: count(MedicationStatus::OutOfStock),
            total_value: medications.iter().map(Medication::inventory_value).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sink;
    use lib::seed_data;

    #[tokio::test]
    async fn low_stock_filter_returns_three_medications() {
        let service = PharmacyService::new(seed_data::medications(), sink());
        let filter = MedicationFilter { stock: "low".to_string(), ..Default::default() };
        let stocks: Vec<u32> = service.list(&filter).await.iter().map(|m| m.stock).collect();
        assert_eq!(stocks, vec![0, 20, 10]);
    }

    #[tokio::test]
    async fn category_and_search_combine() {
        let service = PharmacyService::new(seed_data::medications(), sink());
        let filter = MedicationFilter {
            query: "pharma".to_string(),
            category: "Antibiotics".to_string(),
            ..Default::default()
        };
        let ids: Vec<String> = service.list(&filter).await.into_iter().map(|m| m.id.into_string()).collect();
        assert_eq!(ids, vec!["M001", "M007"]);
    }

    #[tokio::test]
    async fn inventory_stats() {
        let service = PharmacyService::new(seed_data::medications(), sink());
        let stats = service.stats().await;
        assert_eq!(stats.total, 10);
        assert_eq!(stats.available, 6);
        assert_eq!(stats.low_stock, 2);
        assert_eq!(stats.below_threshold, 3);
        assert_eq!(stats.out_of_stock, 1);
        assert!(stats.total_value > 0.0);
    }

    #[tokio::test]
    async fn negative_stock_is_rejected() {
        let log = sink();
        let service = PharmacyService::new(seed_data::medications(), log.clone());
        let form = MedicationFormData {
            name: "Paracetamol".to_string(),
            category: "Pain Relief".to_string(),
            manufacturer: "MediCare Ltd.".to_string(),
            stock: -1,
            price: 4.0,
            status: "Available".to_string(),
        };
        assert!(service.add_medication(&form).await.is_err());
        assert!(log.last().await.is_none());
    }

    #[tokio::test]
    async fn categories_are_distinct() {
        let service = PharmacyService::new(seed_data::medications(), sink());
        assert_eq!(service.categories().await.len(), 6);
    }
}

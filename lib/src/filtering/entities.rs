// lib/src/filtering/entities.rs

//! Search fields and selectors for each list page.

use std::borrow::Cow;

use models::{ActivityLogEntry, Appointment, Doctor, MedicalRecord, Medication, Patient};

use super::buckets::{bucket_criterion, ExperienceLevel, StockLevel};
use super::{Criterion, FieldValue, FilterSpec, Filterable};

fn equals(value: &str) -> Criterion {
    Criterion::Equals(value.to_string())
}

fn contains(value: &str) -> Criterion {
    Criterion::Contains(value.to_string())
}

impl Filterable for Patient {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.name.as_str()), Cow::Borrowed(self.id.as_str()), Cow::Borrowed(self.condition.as_str())]
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "status" => Some(FieldValue::text(self.status.as_str())),
            "gender" => Some(FieldValue::text(&self.gender)),
            "doctor" => Some(FieldValue::text(&self.doctor)),
            _ => None,
        }
    }
}

impl Filterable for Doctor {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.name.as_str()), Cow::Borrowed(self.specialization.as_str()), Cow::Borrowed(self.id.as_str())]
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "department" => Some(FieldValue::text(&self.department)),
            "status" => Some(FieldValue::text(self.status.as_str())),
            // Unparseable experience strings fall outside every bucket.
            "experience" => self.experience_years().map(FieldValue::Number),
            _ => None,
        }
    }
}

impl Filterable for Appointment {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.patient.as_str()), Cow::Borrowed(self.doctor.as_str()), Cow::Borrowed(self.department.as_str())]
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "status" => Some(FieldValue::text(self.status.as_str())),
            "type" => Some(FieldValue::text(&self.appointment_type)),
            "department" => Some(FieldValue::text(&self.department)),
            _ => None,
        }
    }
}

impl Filterable for Medication {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.name.as_str()), Cow::Borrowed(self.id.as_str()), Cow::Borrowed(self.manufacturer.as_str())]
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "category" => Some(FieldValue::text(&self.category)),
            "status" => Some(FieldValue::text(self.status.as_str())),
            "stock" => Some(FieldValue::Number(self.stock)),
            _ => None,
        }
    }
}

impl Filterable for MedicalRecord {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.patient_name.as_str()), Cow::Borrowed(self.patient_id.as_str()), Cow::Borrowed(self.diagnosis.as_str())]
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "type" => Some(FieldValue::text(&self.record_type)),
            "doctor" => Some(FieldValue::text(&self.doctor)),
            "date" => Some(FieldValue::Text(Cow::Owned(self.date.format("%Y-%m-%d").to_string()))),
            _ => None,
        }
    }
}

impl Filterable for ActivityLogEntry {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.user_name.as_str()), Cow::Borrowed(self.action.as_str()), Cow::Borrowed(self.resource.as_str())]
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "role" => Some(FieldValue::text(&self.user_role)),
            "status" => Some(FieldValue::text(self.status.as_str())),
            _ => None,
        }
    }
}

/// Patients page: search plus status, gender and a free-typed doctor name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientFilter {
    pub query: String,
    pub status: String,
    pub gender: String,
    pub doctor: String,
}

impl PatientFilter {
    pub fn to_spec(&self) -> FilterSpec {
        FilterSpec::new(&self.query)
            .with_selector("status", &self.status, equals)
            .with_selector("gender", &self.gender, equals)
            .with_selector("doctor", &self.doctor, contains)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorFilter {
    pub query: String,
    pub department: String,
    pub status: String,
    /// `junior`, `senior` or `expert`.
    pub experience: String,
}

impl DoctorFilter {
    pub fn to_spec(&self) -> FilterSpec {
        FilterSpec::new(&self.query)
            .with_selector("department", &self.department, equals)
            .with_selector("status", &self.status, equals)
            .with_selector("experience", &self.experience, |name| {
                bucket_criterion::<ExperienceLevel>(name, ExperienceLevel::bounds)
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentFilter {
    pub query: String,
    pub status: String,
    pub appointment_type: String,
    pub department: String,
}

impl AppointmentFilter {
    pub fn to_spec(&self) -> FilterSpec {
        FilterSpec::new(&self.query)
            .with_selector("status", &self.status, equals)
            .with_selector("type", &self.appointment_type, equals)
            .with_selector("department", &self.department, equals)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MedicationFilter {
    pub query: String,
    pub category: String,
    pub status: String,
    /// `low`, `medium` or `high`.
    pub stock: String,
}

impl MedicationFilter {
    pub fn to_spec(&self) -> FilterSpec {
        FilterSpec::new(&self.query)
            .with_selector("category", &self.category, equals)
            .with_selector("status", &self.status, equals)
            .with_selector("stock", &self.stock, |name| bucket_criterion::<StockLevel>(name, StockLevel::bounds))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub query: String,
    pub record_type: String,
    pub doctor: String,
    /// `YYYY-MM-DD`
    pub date: String,
}

impl RecordFilter {
    pub fn to_spec(&self) -> FilterSpec {
        FilterSpec::new(&self.query)
            .with_selector("type", &self.record_type, equals)
            .with_selector("doctor", &self.doctor, contains)
            .with_selector("date", &self.date, equals)
    }
}

/// User activity page. Roles are compared without regard to case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityFilter {
    pub query: String,
    pub role: String,
    pub status: String,
}

impl ActivityFilter {
    pub fn to_spec(&self) -> FilterSpec {
        FilterSpec::new(&self.query)
            .with_selector("role", &self.role, |role| Criterion::EqualsIgnoreCase(role.to_string()))
            .with_selector("status", &self.status, equals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::filter_records;
    use crate::seed_data;

    fn ids<T>(records: &[T], id: fn(&T) -> &str) -> Vec<String> {
        records.iter().map(|r| id(r).to_string()).collect()
    }

    #[test]
    fn smith_finds_only_john_smith() {
        let filter = PatientFilter { query: "smith".to_string(), ..Default::default() };
        let found = filter_records(&seed_data::patients(), &filter.to_spec());
        assert_eq!(ids(&found, |p| p.id.as_str()), vec!["P001"]);
        assert_eq!(found[0].name, "John Smith");
    }

    #[test]
    fn query_is_case_insensitive() {
        let patients = seed_data::patients();
        let upper = PatientFilter { query: "JOHN".to_string(), ..Default::default() };
        let lower = PatientFilter { query: "john".to_string(), ..Default::default() };
        assert_eq!(filter_records(&patients, &upper.to_spec()), filter_records(&patients, &lower.to_spec()));
    }

    #[test]
    fn low_stock_bucket_excludes_the_boundary() {
        let filter = MedicationFilter { stock: "low".to_string(), ..Default::default() };
        let found = filter_records(&seed_data::medications(), &filter.to_spec());
        assert_eq!(ids(&found, |m| m.id.as_str()), vec!["M005", "M007", "M010"]);
        assert!(found.iter().all(|m| m.stock < 50));
    }

    #[test]
    fn medium_stock_includes_fifty() {
        let filter = MedicationFilter { stock: "medium".to_string(), ..Default::default() };
        let found = filter_records(&seed_data::medications(), &filter.to_spec());
        assert!(found.iter().any(|m| m.id == "M004"));
        assert!(found.iter().all(|m| (50..200).contains(&m.stock)));
    }

    #[test]
    fn sentinel_all_equals_unset() {
        let meds = seed_data::medications();
        let unset = MedicationFilter { query: "in".to_string(), ..Default::default() };
        let all = MedicationFilter {
            query: "in".to_string(),
            category: "all".to_string(),
            status: "all".to_string(),
            stock: "all".to_string(),
        };
        assert_eq!(filter_records(&meds, &unset.to_spec()), filter_records(&meds, &all.to_spec()));
    }

    #[test]
    fn filtering_is_an_idempotent_subset() {
        let doctors = seed_data::doctors();
        let filter = DoctorFilter { experience: "expert".to_string(), ..Default::default() };
        let once = filter_records(&doctors, &filter.to_spec());
        let twice = filter_records(&once, &filter.to_spec());
        assert_eq!(once, twice);
        assert!(once.len() <= doctors.len());
        assert!(once.iter().all(|d| doctors.contains(d)));
        // Every seeded doctor has at least ten years of practice.
        assert_eq!(once.len(), 4);
    }

    #[test]
    fn unknown_experience_bucket_matches_nothing() {
        let filter = DoctorFilter { experience: "veteran".to_string(), ..Default::default() };
        assert!(filter_records(&seed_data::doctors(), &filter.to_spec()).is_empty());
    }

    #[test]
    fn patient_doctor_selector_is_a_substring() {
        let filter = PatientFilter { doctor: "wilson".to_string(), ..Default::default() };
        let found = filter_records(&seed_data::patients(), &filter.to_spec());
        assert_eq!(ids(&found, |p| p.id.as_str()), vec!["P001"]);
    }

    #[test]
    fn status_selector_is_exact() {
        let filter = PatientFilter { status: "active".to_string(), ..Default::default() };
        assert!(filter_records(&seed_data::patients(), &filter.to_spec()).is_empty());
        let filter = PatientFilter { status: "Active".to_string(), ..Default::default() };
        assert_eq!(filter_records(&seed_data::patients(), &filter.to_spec()).len(), 2);
    }

    #[test]
    fn appointment_selectors_combine() {
        let filter = AppointmentFilter {
            department: "Cardiology".to_string(),
            status: "Scheduled".to_string(),
            ..Default::default()
        };
        let found = filter_records(&seed_data::appointments(), &filter.to_spec());
        assert_eq!(ids(&found, |a| a.id.as_str()), vec!["A001"]);
    }

    #[test]
    fn record_date_and_type_selectors() {
        let filter = RecordFilter { date: "2024-01-21".to_string(), ..Default::default() };
        let found = filter_records(&seed_data::medical_records(), &filter.to_spec());
        assert_eq!(ids(&found, |r| r.id.as_str()), vec!["R003", "R004"]);

        let filter = RecordFilter { record_type: "Lab Results".to_string(), ..Default::default() };
        let found = filter_records(&seed_data::medical_records(), &filter.to_spec());
        assert_eq!(ids(&found, |r| r.id.as_str()), vec!["R002"]);
    }

    #[test]
    fn activity_role_ignores_case() {
        let filter = ActivityFilter { role: "doctor".to_string(), ..Default::default() };
        let found = filter_records(&seed_data::activity_log(), &filter.to_spec());
        assert_eq!(found.len(), 3);
        assert!(found.iter().all(|a| a.user_role == "Doctor"));
    }
}

// lib/src/seed_data.rs

//! Demo records every page starts from.
//!
//! All data in this module is hardcoded and fictional. Each call returns a
//! fresh copy; services keep their own session copy and mutate that.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};

use models::{
    ActivityLogEntry, ActivityStatus, Appointment, AppointmentStatus, DepartmentShare, Doctor, DoctorStatus, Identifier,
    MedicalRecord, Medication, MedicationStatus, MonthlyStat, Patient, PatientStatus, PermissionSetting, RecentActivity,
    Role, SatisfactionPoint, StatsCard, Trend, User, UserRole,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap_or_default()
}

// ── People ──────────────────────────────────────────────────────────────────

pub fn patients() -> Vec<Patient> {
    let patient = |id, name: &str, age, gender: &str, phone: &str, email: &str, last_visit, status, condition: &str, doctor: &str| {
        Patient {
            id: Identifier::seed(id),
            name: name.to_string(),
            age,
            gender: gender.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            last_visit,
            status,
            condition: condition.to_string(),
            doctor: doctor.to_string(),
        }
    };

    vec![
        patient("P001", "John Smith", 34, "Male", "+1 (555) 123-4567", "john.smith@email.com", date(2024, 1, 15), PatientStatus::Active, "Hypertension", "Dr. Sarah Wilson"),
        patient("P002", "Emily Davis", 28, "Female", "+1 (555) 234-5678", "emily.davis@email.com", date(2024, 1, 14), PatientStatus::Active, "Diabetes", "Dr. Michael Chen"),
        patient("P003", "Robert Johnson", 45, "Male", "+1 (555) 345-6789", "robert.johnson@email.com", date(2024, 1, 12), PatientStatus::Discharged, "Surgery Recovery", "Dr. Lisa Rodriguez"),
        patient("P004", "Maria Garcia", 32, "Female", "+1 (555) 456-7890", "maria.garcia@email.com", date(2024, 1, 18), PatientStatus::Critical, "Emergency", "Dr. James Thompson"),
    ]
}

pub fn doctors() -> Vec<Doctor> {
    let doctor = |id, name: &str, specialization: &str, department: &str, experience: &str, phone: &str, email: &str, status, location: &str, rating, patients| {
        Doctor {
            id: Identifier::seed(id),
            name: name.to_string(),
            specialization: specialization.to_string(),
            department: department.to_string(),
            experience: experience.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            status,
            location: location.to_string(),
            rating,
            patients,
        }
    };

    vec![
        doctor("D001", "Dr. Sarah Wilson", "Cardiology", "Heart Institute", "15 years", "+1 (555) 111-2222", "sarah.wilson@medicare.com", DoctorStatus::Available, "Building A, Floor 3", 4.9, 45),
        doctor("D002", "Dr. Michael Chen", "Endocrinology", "Internal Medicine", "12 years", "+1 (555) 222-3333", "michael.chen@medicare.com", DoctorStatus::InSurgery, "Building B, Floor 2", 4.8, 38),
        doctor("D003", "Dr. Lisa Rodriguez", "General Surgery", "Surgical", "18 years", "+1 (555) 333-4444", "lisa.rodriguez@medicare.com", DoctorStatus::Available, "Building A, Floor 5", 4.9, 52),
        doctor("D004", "Dr. James Thompson", "Emergency Medicine", "Emergency", "10 years", "+1 (555) 444-5555", "james.thompson@medicare.com", DoctorStatus::OnCall, "Emergency Wing", 4.7, 28),
    ]
}

/// The signed-in user of the demo session.
pub fn demo_user() -> User {
    User {
        id: Identifier::seed("1"),
        name: "Dr. John Smith".to_string(),
        email: "john.smith@hospital.com".to_string(),
        role: UserRole::Doctor,
    }
}

// ── Scheduling and clinical data ────────────────────────────────────────────

pub fn appointments() -> Vec<Appointment> {
    let appointment = |id, patient: &str, patient_id, doctor: &str, department: &str, on, time: &str, kind: &str, status, room: &str, notes: &str| {
        Appointment {
            id: Identifier::seed(id),
            patient: patient.to_string(),
            patient_id: Identifier::seed(patient_id),
            doctor: doctor.to_string(),
            department: department.to_string(),
            date: on,
            time: time.to_string(),
            appointment_type: kind.to_string(),
            status,
            room: room.to_string(),
            notes: notes.to_string(),
        }
    };

    vec![
        appointment("A001", "John Smith", "P001", "Dr. Sarah Wilson", "Cardiology", date(2024, 1, 20), "09:00 AM", "Consultation", AppointmentStatus::Scheduled, "C-301", "Regular checkup"),
        appointment("A002", "Emily Davis", "P002", "Dr. Michael Chen", "Endocrinology", date(2024, 1, 20), "10:30 AM", "Follow-up", AppointmentStatus::InProgress, "E-205", "Diabetes follow-up"),
        appointment("A003", "Robert Johnson", "P003", "Dr. Lisa Rodriguez", "Surgery", date(2024, 1, 20), "02:00 PM", "Pre-Surgery", AppointmentStatus::Completed, "S-401", "Pre-operative consultation"),
        appointment("A004", "Maria Garcia", "P004", "Dr. James Thompson", "Emergency", date(2024, 1, 21), "08:00 AM", "Emergency", AppointmentStatus::Urgent, "ER-1", "Emergency consultation"),
    ]
}

pub fn medical_records() -> Vec<MedicalRecord> {
    let record = |id, patient_id, patient_name: &str, doctor: &str, department: &str, on, kind: &str, diagnosis: &str, notes: &str| {
        MedicalRecord {
            id: Identifier::seed(id),
            patient_id: Identifier::seed(patient_id),
            patient_name: patient_name.to_string(),
            doctor: doctor.to_string(),
            department: department.to_string(),
            date: on,
            record_type: kind.to_string(),
            diagnosis: diagnosis.to_string(),
            notes: notes.to_string(),
            status: "Completed".to_string(),
        }
    };

    vec![
        record("R001", "P001", "John Smith", "Dr. Sarah Wilson", "Cardiology", date(2024, 1, 20), "Consultation", "Hypertension", "Regular checkup"),
        record("R002", "P002", "Emily Davis", "Dr. Michael Chen", "Endocrinology", date(2024, 1, 20), "Lab Results", "Diabetes", "Blood sugar levels checked"),
        record("R003", "P003", "Robert Johnson", "Dr. Lisa Rodriguez", "Surgery", date(2024, 1, 21), "Surgery", "Appendectomy", "Successful surgery"),
        record("R004", "P004", "Maria Garcia", "Dr. James Thompson", "Emergency", date(2024, 1, 21), "Emergency", "Fractured Arm", "Immediate care provided"),
    ]
}

pub fn medications() -> Vec<Medication> {
    let medication = |id, name: &str, category: &str, manufacturer: &str, stock, status, price, last_updated| Medication {
        id: Identifier::seed(id),
        name: name.to_string(),
        category: category.to_string(),
        manufacturer: manufacturer.to_string(),
        stock,
        status,
        price,
        last_updated,
    };

    vec![
        medication("M001", "Amoxicillin", "Antibiotics", "PharmaCorp", 150, MedicationStatus::Available, 12.50, date(2024, 1, 10)),
        medication("M002", "Ibuprofen", "Pain Relief", "MediCare Ltd.", 80, MedicationStatus::Available, 8.00, date(2024, 1, 15)),
        medication("M003", "Metformin", "Diabetes", "Glucosafe Inc.", 220, MedicationStatus::Available, 15.75, date(2024, 1, 20)),
        medication("M004", "Vitamin D3", "Vitamins", "VitaPlus Co.", 50, MedicationStatus::LowStock, 5.20, date(2024, 1, 22)),
        medication("M005", "Aspirin", "Pain Relief", "Bayer", 0, MedicationStatus::OutOfStock, 6.50, date(2024, 1, 25)),
        medication("M006", "Lisinopril", "Heart Medication", "HeartGuard Pharma", 300, MedicationStatus::Available, 22.00, date(2024, 1, 28)),
        medication("M007", "Ciprofloxacin", "Antibiotics", "Global Pharma", 20, MedicationStatus::LowStock, 18.50, date(2024, 1, 30)),
        medication("M008", "Omeprazole", "Gastrointestinal", "DigestWell Inc.", 120, MedicationStatus::Available, 9.25, date(2024, 2, 1)),
        medication("M009", "Simvastatin", "Heart Medication", "CardioLife Ltd.", 60, MedicationStatus::Available, 25.00, date(2024, 2, 3)),
        medication("M010", "Multivitamin", "Vitamins", "HealthFirst Corp.", 10, MedicationStatus::Expired, 7.80, date(2023, 12, 1)),
    ]
}

// ── Access control ──────────────────────────────────────────────────────────

pub fn roles() -> Vec<Role> {
    let role = |id, name: &str, description: &str, permissions: &[&str], user_count, color: &str| Role {
        id: Identifier::seed(id),
        name: name.to_string(),
        description: description.to_string(),
        permissions: permissions.iter().map(|p| p.to_string()).collect::<BTreeSet<_>>(),
        user_count,
        color: color.to_string(),
    };

    vec![
        role(
            "1",
            "Administrator",
            "Full system access including user management, settings, and data administration.",
            &["user_management", "system_admin", "reporting", "billing_access"],
            5,
            "bg-primary",
        ),
        role(
            "2",
            "Doctor",
            "Access to patient records, medical procedures, and prescription management.",
            &["patient_records", "appointment_scheduling", "pharmacy_access", "lab_results"],
            156,
            "bg-success",
        ),
        role(
            "3",
            "Nurse",
            "Patient care access, basic medical records, and nursing documentation.",
            &["patient_records", "appointment_scheduling"],
            89,
            "bg-medical-accent",
        ),
        role(
            "4",
            "Receptionist",
            "Front desk operations, appointment scheduling, and basic patient information.",
            &["appointment_scheduling"],
            23,
            "bg-secondary",
        ),
    ]
}

pub fn permission_settings() -> Vec<PermissionSetting> {
    let setting = |id, name: &str, description: &str, category: &str, enabled| PermissionSetting {
        id: Identifier::seed(id),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        enabled,
    };

    vec![
        setting("1", "User Management", "Create, edit, and delete user accounts", "Administration", true),
        setting("2", "Patient Records Access", "View and edit patient medical records", "Medical", true),
        setting("3", "Appointment Scheduling", "Create and manage patient appointments", "Operations", true),
        setting("4", "Billing Access", "Access billing and payment information", "Finance", true),
        setting("5", "Reporting Dashboard", "Access to system reports and analytics", "Analytics", true),
        setting("6", "System Administration", "Modify system settings and configurations", "Administration", false),
        setting("7", "Pharmacy Access", "Manage medications and prescriptions", "Medical", true),
        setting("8", "Lab Results", "View and manage laboratory test results", "Medical", true),
        setting("9", "Emergency Override", "Override system restrictions in emergencies", "Emergency", false),
        setting("10", "Data Export", "Export patient and system data", "Administration", false),
    ]
}

pub fn activity_log() -> Vec<ActivityLogEntry> {
    let entry = |id, user_id: &str, user_name: &str, user_role: &str, action: &str, resource: &str, timestamp, ip: &str, status, details: &str| {
        ActivityLogEntry {
            id: Identifier::seed(id),
            user_id: user_id.to_string(),
            user_name: user_name.to_string(),
            user_role: user_role.to_string(),
            action: action.to_string(),
            resource: resource.to_string(),
            timestamp,
            ip_address: ip.to_string(),
            status,
            details: details.to_string(),
        }
    };

    vec![
        entry("1", "user_1", "Dr. Sarah Johnson", "Doctor", "Viewed Patient Record", "Patient #12345", at(2024, 1, 15, 10, 30), "192.168.1.100", ActivityStatus::Success, "Accessed patient medical history"),
        entry("2", "user_2", "John Admin", "Administrator", "Created User Account", "Dr. Michael Chen", at(2024, 1, 15, 9, 15), "192.168.1.50", ActivityStatus::Success, "Created new doctor account"),
        entry("3", "user_3", "Nurse Mary", "Nurse", "Failed Login Attempt", "Login System", at(2024, 1, 15, 8, 45), "192.168.1.75", ActivityStatus::Failed, "Invalid password entered"),
        entry("4", "user_4", "Dr. Robert Wilson", "Doctor", "Updated Prescription", "Patient #67890", at(2024, 1, 15, 8, 20), "192.168.1.120", ActivityStatus::Success, "Modified medication dosage"),
        entry("5", "user_5", "Lisa Receptionist", "Receptionist", "Scheduled Appointment", "Dr. Johnson - Patient #11111", at(2024, 1, 15, 7, 30), "192.168.1.25", ActivityStatus::Success, "Booked follow-up appointment"),
        entry("6", "user_6", "Dr. Emily Davis", "Doctor", "Accessed Lab Results", "Lab Report #LR-2024-001", at(2024, 1, 14, 16, 45), "192.168.1.110", ActivityStatus::Warning, "Accessed results outside normal hours"),
    ]
}

// ── Dashboard and analytics ─────────────────────────────────────────────────

pub fn stats_cards() -> Vec<StatsCard> {
    let card = |title: &str, value: &str, change: &str, trend| StatsCard {
        title: title.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        trend,
    };

    vec![
        card("Total Patients", "2,847", "+12% from last month", Trend::Up),
        card("Active Doctors", "156", "+3 new this week", Trend::Up),
        card("Today's Appointments", "89", "23 completed", Trend::Neutral),
        card("Emergency Cases", "7", "-2 from yesterday", Trend::Down),
    ]
}

pub fn recent_activity() -> Vec<RecentActivity> {
    let activity = |id, patient: &str, action: &str, doctor: &str, time: &str, kind: &str| RecentActivity {
        id,
        patient: patient.to_string(),
        action: action.to_string(),
        doctor: doctor.to_string(),
        time: time.to_string(),
        kind: kind.to_string(),
    };

    vec![
        activity(1, "John Smith", "Appointment scheduled", "Dr. Sarah Wilson", "10 minutes ago", "appointment"),
        activity(2, "Emily Davis", "Lab results updated", "Dr. Michael Chen", "25 minutes ago", "lab"),
        activity(3, "Robert Johnson", "Prescription refilled", "Dr. Lisa Rodriguez", "1 hour ago", "prescription"),
        activity(4, "Maria Garcia", "Emergency visit", "Dr. James Thompson", "2 hours ago", "emergency"),
    ]
}

pub fn monthly_stats() -> Vec<MonthlyStat> {
    [
        ("Jan", 240, 320, 45_000),
        ("Feb", 280, 380, 52_000),
        ("Mar", 320, 420, 58_000),
        ("Apr", 290, 390, 54_000),
        ("May", 350, 460, 65_000),
        ("Jun", 380, 500, 70_000),
    ]
    .into_iter()
    .map(|(month, patients, appointments, revenue)| MonthlyStat {
        month: month.to_string(),
        patients,
        appointments,
        revenue,
    })
    .collect()
}

pub fn department_distribution() -> Vec<DepartmentShare> {
    [
        ("Cardiology", 25, 450, "#3b82f6"),
        ("Emergency", 20, 360, "#ef4444"),
        ("Surgery", 18, 324, "#10b981"),
        ("Pediatrics", 15, 270, "#f59e0b"),
        ("Orthopedics", 12, 216, "#8b5cf6"),
        ("Other", 10, 180, "#6b7280"),
    ]
    .into_iter()
    .map(|(name, value, patients, color)| DepartmentShare {
        name: name.to_string(),
        value,
        patients,
        color: color.to_string(),
    })
    .collect()
}

pub fn satisfaction_trend() -> Vec<SatisfactionPoint> {
    [("Jan", 4.2), ("Feb", 4.3), ("Mar", 4.1), ("Apr", 4.4), ("May", 4.5), ("Jun", 4.6)]
        .into_iter()
        .map(|(month, satisfaction)| SatisfactionPoint {
            month: month.to_string(),
            satisfaction,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique_per_list() {
        let mut ids: Vec<_> = medications().into_iter().map(|m| m.id).collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn department_shares_sum_to_one_hundred() {
        assert_eq!(department_distribution().iter().map(|d| d.value).sum::<u32>(), 100);
    }

    #[test]
    fn seeded_roles_only_use_catalogue_permissions() {
        for role in roles() {
            assert!(role.permissions.iter().all(|p| models::PERMISSION_CATALOGUE.contains(&p.as_str())));
        }
    }

    #[test]
    fn every_appointment_refers_to_a_seeded_patient() {
        let patients = patients();
        for appointment in appointments() {
            assert!(patients.iter().any(|p| p.id == appointment.patient_id && p.name == appointment.patient));
        }
    }
}

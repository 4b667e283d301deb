use std::sync::Arc;

use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::{AppState, Database};
use shared_models::{AppointmentRequest, CreateDoctorRequest, SlotUpsertRequest};

pub struct TestConfig {
    pub mongodb_uri: String,
    pub database_name: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            mongodb_uri: "mongodb://127.0.0.1:27017".to_string(),
            database_name: "appoint_test".to_string(),
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            mongodb_uri: self.mongodb_uri.clone(),
            database_name: self.database_name.clone(),
            ..AppConfig::default()
        }
    }

    /// State backed by a fresh in-memory store.
    pub fn to_state(&self) -> Arc<AppState> {
        Arc::new(AppState::new(self.to_app_config(), Database::in_memory()))
    }
}

pub fn test_state() -> Arc<AppState> {
    TestConfig::default().to_state()
}

/// Patient id that no other test shares.
pub fn unique_patient_id() -> String {
    format!("patient-{}", Uuid::new_v4())
}

pub fn doctor_request(name: &str, dept: &str) -> CreateDoctorRequest {
    CreateDoctorRequest {
        name: name.to_string(),
        dept: dept.to_string(),
        ailments: vec!["x".to_string()],
        timing: vec!["9-10".to_string()],
        picture: String::new(),
    }
}

pub fn appointment_request(patient_id: &str, doctor_id: &str, date: &str) -> AppointmentRequest {
    AppointmentRequest {
        patient_id: patient_id.to_string(),
        patient: "P".to_string(),
        date: Some(date.to_string()),
        slot: "9-10".to_string(),
        status: None,
        doctor: doctor_id.to_string(),
        created_by: patient_id.to_string(),
    }
}

pub fn slot_request(doctor_id: &str, date: &str, labels: &[&str], booked: i64) -> SlotUpsertRequest {
    SlotUpsertRequest {
        doctor: doctor_id.to_string(),
        date: date.to_string(),
        slot: labels.iter().map(|l| l.to_string()).collect(),
        booked: Some(booked),
        total: None,
    }
}

use chrono::Utc;
use tracing::{debug, info};

use shared_database::{new_id, AppState, Database, DatabaseError};
use shared_models::{CreateDoctorRequest, Doctor};

pub struct DoctorService {
    db: Database,
}

impl DoctorService {
    pub fn new(state: &AppState) -> Self {
        Self {
            db: state.db.clone(),
        }
    }

    /// Every doctor, unfiltered.
    pub async fn list_doctors(&self) -> Result<Vec<Doctor>, DatabaseError> {
        debug!("Fetching doctor list");
        self.db.doctors().list().await
    }

    /// `None` when no doctor has this id.
    pub async fn get_doctor(&self, doctor_id: &str) -> Result<Option<Doctor>, DatabaseError> {
        debug!("Fetching doctor profile: {}", doctor_id);
        self.db.doctors().find_by_id(doctor_id).await
    }

    pub async fn create_doctor(&self, request: CreateDoctorRequest) -> Result<Doctor, DatabaseError> {
        let doctor = Doctor::from_request(new_id(), request, Utc::now());
        self.db.doctors().insert(&doctor).await?;

        info!("Doctor profile created with ID: {}", doctor.id);
        Ok(doctor)
    }
}

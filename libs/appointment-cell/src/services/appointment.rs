// libs/appointment-cell/src/services/appointment.rs
use std::collections::HashMap;

use tracing::{debug, info};

use shared_database::{AppState, Database, DatabaseError};
use shared_models::{Appointment, AppointmentDetails, DoctorSummary};

pub struct AppointmentService {
    db: Database,
}

impl AppointmentService {
    pub fn new(state: &AppState) -> Self {
        Self {
            db: state.db.clone(),
        }
    }

    /// A patient's appointments with each doctor id resolved to `{_id, name}`.
    pub async fn get_patient_appointments(
        &self,
        patient_id: &str,
    ) -> Result<Vec<AppointmentDetails>, DatabaseError> {
        debug!("Fetching appointments for patient {}", patient_id);

        let appointments = self.db.appointments().list_for_patient(patient_id).await?;

        let mut doctor_ids: Vec<String> = appointments.iter().map(|a| a.doctor.clone()).collect();
        doctor_ids.sort();
        doctor_ids.dedup();

        let doctors: HashMap<String, DoctorSummary> = self
            .db
            .doctors()
            .find_many(&doctor_ids)
            .await?
            .iter()
            .map(|d| (d.id.clone(), d.summary()))
            .collect();

        Ok(appointments
            .into_iter()
            .map(|appointment| {
                let doctor = doctors.get(&appointment.doctor).cloned();
                appointment.with_doctor(doctor)
            })
            .collect())
    }

    pub async fn get_appointment(&self, appointment_id: &str) -> Result<Option<Appointment>, DatabaseError> {
        debug!("Fetching appointment {}", appointment_id);
        self.db.appointments().find_by_id(appointment_id).await
    }

    /// Unconditional; cancelling an unknown id is not an error.
    pub async fn cancel_appointment(&self, appointment_id: &str) -> Result<bool, DatabaseError> {
        let removed = self.db.appointments().delete(appointment_id).await?;
        if removed {
            info!("Appointment {} cancelled", appointment_id);
        } else {
            debug!("Cancel requested for unknown appointment {}", appointment_id);
        }
        Ok(removed)
    }
}

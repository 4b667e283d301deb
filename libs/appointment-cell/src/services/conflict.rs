// libs/appointment-cell/src/services/conflict.rs
use tracing::{debug, warn};

use shared_database::{Database, DatabaseError};
use shared_models::{Appointment, BookingKey};

pub struct ConflictDetectionService {
    db: Database,
}

impl ConflictDetectionService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// An appointment already holding `key`, ignoring `exclude_appointment_id`
    /// so an edit never conflicts with itself.
    pub async fn find_conflict(
        &self,
        key: &BookingKey,
        exclude_appointment_id: Option<&str>,
    ) -> Result<Option<Appointment>, DatabaseError> {
        debug!(
            "Checking bookings for patient {} with doctor {} on {}",
            key.patient_id, key.doctor, key.date
        );

        let existing = self
            .db
            .appointments()
            .find_booking(key, exclude_appointment_id)
            .await?;

        if let Some(appointment) = &existing {
            warn!(
                "Patient {} already holds appointment {} with doctor {} on {}",
                key.patient_id, appointment.id, key.doctor, key.date
            );
        }

        Ok(existing)
    }
}

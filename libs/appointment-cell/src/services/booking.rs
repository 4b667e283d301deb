// libs/appointment-cell/src/services/booking.rs
use chrono::Utc;
use tracing::{info, warn};

use shared_database::{new_id, AppState, Database, DatabaseError};
use shared_models::{
    Appointment, AppointmentChanges, AppointmentRequest, DEFAULT_APPOINTMENT_STATUS,
};

use crate::models::BookingOutcome;
use crate::services::conflict::ConflictDetectionService;

pub struct AppointmentBookingService {
    db: Database,
    conflict_service: ConflictDetectionService,
}

/// Appointments posted without a date are booked for the current UTC day.
fn resolve_date(date: Option<String>) -> String {
    date.unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string())
}

impl AppointmentBookingService {
    pub fn new(state: &AppState) -> Self {
        Self {
            db: state.db.clone(),
            conflict_service: ConflictDetectionService::new(state.db.clone()),
        }
    }

    /// Books unless the patient already holds `(date, doctor)`. The store
    /// rejects the insert atomically too, so of two concurrent requests for
    /// the same triple exactly one is accepted.
    pub async fn book_appointment(
        &self,
        request: AppointmentRequest,
    ) -> Result<BookingOutcome<Appointment>, DatabaseError> {
        let now = Utc::now();
        let appointment = Appointment {
            id: new_id(),
            patient_id: request.patient_id,
            patient: request.patient,
            date: resolve_date(request.date),
            slot: request.slot,
            status: request
                .status
                .unwrap_or_else(|| DEFAULT_APPOINTMENT_STATUS.to_string()),
            doctor: request.doctor,
            created_by: request.created_by,
            created_on: now,
            modified_on: now,
        };
        let key = appointment.booking_key();

        if self.conflict_service.find_conflict(&key, None).await?.is_some() {
            return Ok(BookingOutcome::AlreadyBooked { date: key.date });
        }

        match self.db.appointments().insert(&appointment).await {
            Ok(()) => {
                info!(
                    "Appointment {} booked for patient {} with doctor {} on {}",
                    appointment.id, appointment.patient_id, appointment.doctor, appointment.date
                );
                Ok(BookingOutcome::Accepted(appointment))
            }
            Err(err) if err.is_duplicate_key() => {
                warn!(
                    "Concurrent booking for patient {} on {} won by another request",
                    key.patient_id, key.date
                );
                Ok(BookingOutcome::AlreadyBooked { date: key.date })
            }
            Err(err) => Err(err),
        }
    }

    /// Accepted value reports whether `appointment_id` matched a document.
    /// An edit without a date keeps the stored one.
    pub async fn update_appointment(
        &self,
        appointment_id: &str,
        request: AppointmentRequest,
    ) -> Result<BookingOutcome<bool>, DatabaseError> {
        let stored_date = match &request.date {
            Some(date) => date.clone(),
            None => match self.db.appointments().find_by_id(appointment_id).await? {
                Some(stored) => stored.date,
                None => {
                    warn!("Update requested for unknown appointment {}", appointment_id);
                    return Ok(BookingOutcome::Accepted(false));
                }
            },
        };

        let changes = AppointmentChanges {
            patient_id: request.patient_id,
            patient: request.patient,
            date: request.date,
            slot: request.slot,
            status: request.status,
            doctor: request.doctor,
            created_by: request.created_by,
            modified_on: Utc::now(),
        };
        let key = changes.booking_key(&stored_date);

        if self
            .conflict_service
            .find_conflict(&key, Some(appointment_id))
            .await?
            .is_some()
        {
            return Ok(BookingOutcome::AlreadyBooked { date: key.date });
        }

        match self.db.appointments().update(appointment_id, &changes).await {
            Ok(true) => {
                info!("Appointment {} updated", appointment_id);
                Ok(BookingOutcome::Accepted(true))
            }
            Ok(false) => {
                warn!("Update requested for unknown appointment {}", appointment_id);
                Ok(BookingOutcome::Accepted(false))
            }
            Err(err) if err.is_duplicate_key() => Ok(BookingOutcome::AlreadyBooked { date: key.date }),
            Err(err) => Err(err),
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::doctor::DoctorSummary;

pub const DEFAULT_APPOINTMENT_STATUS: &str = "upcoming";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(rename = "_id")]
    pub id: String,
    pub patient_id: String,
    pub patient: String,
    pub date: String,
    pub slot: String,
    pub status: String,
    pub doctor: String,
    pub created_by: String,
    pub created_on: DateTime<Utc>,
    pub modified_on: DateTime<Utc>,
}

impl Appointment {
    pub fn booking_key(&self) -> BookingKey {
        BookingKey {
            date: self.date.clone(),
            patient_id: self.patient_id.clone(),
            doctor: self.doctor.clone(),
        }
    }

    /// Swaps the doctor id for the joined doctor, for patient listings.
    pub fn with_doctor(self, doctor: Option<DoctorSummary>) -> AppointmentDetails {
        AppointmentDetails {
            id: self.id,
            patient_id: self.patient_id,
            patient: self.patient,
            date: self.date,
            slot: self.slot,
            status: self.status,
            doctor,
            created_by: self.created_by,
            created_on: self.created_on,
            modified_on: self.modified_on,
        }
    }

    /// Applies an edit in place; `created_on` is never touched.
    pub fn apply(&mut self, changes: &AppointmentChanges) {
        self.patient_id = changes.patient_id.clone();
        self.patient = changes.patient.clone();
        if let Some(date) = &changes.date {
            self.date = date.clone();
        }
        self.slot = changes.slot.clone();
        if let Some(status) = &changes.status {
            self.status = status.clone();
        }
        self.doctor = changes.doctor.clone();
        self.created_by = changes.created_by.clone();
        self.modified_on = changes.modified_on;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDetails {
    #[serde(rename = "_id")]
    pub id: String,
    pub patient_id: String,
    pub patient: String,
    pub date: String,
    pub slot: String,
    pub status: String,
    pub doctor: Option<DoctorSummary>,
    pub created_by: String,
    pub created_on: DateTime<Utc>,
    pub modified_on: DateTime<Utc>,
}

/// Body of both `POST /api/save/appointment` and `PUT /api/edit/appointment/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub patient_id: String,
    pub patient: String,
    #[serde(default)]
    pub date: Option<String>,
    pub slot: String,
    #[serde(default)]
    pub status: Option<String>,
    pub doctor: String,
    pub created_by: String,
}

/// The triple no two appointments may share.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookingKey {
    pub date: String,
    pub patient_id: String,
    pub doctor: String,
}

/// Field set written by an appointment edit. `None` keeps the stored value.
#[derive(Debug, Clone)]
pub struct AppointmentChanges {
    pub patient_id: String,
    pub patient: String,
    pub date: Option<String>,
    pub slot: String,
    pub status: Option<String>,
    pub doctor: String,
    pub created_by: String,
    pub modified_on: DateTime<Utc>,
}

impl AppointmentChanges {
    /// Key the edited document will hold, given the date it currently has.
    pub fn booking_key(&self, stored_date: &str) -> BookingKey {
        BookingKey {
            date: self.date.clone().unwrap_or_else(|| stored_date.to_string()),
            patient_id: self.patient_id.clone(),
            doctor: self.doctor.clone(),
        }
    }
}

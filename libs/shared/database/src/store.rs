use async_trait::async_trait;

use shared_models::{Appointment, AppointmentChanges, BookingKey, Doctor, Slot, SlotUpsertRequest};

use crate::error::DatabaseError;

#[async_trait]
pub trait DoctorStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Doctor>, DatabaseError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Doctor>, DatabaseError>;

    /// Doctors whose id is in `ids`; unknown ids are skipped.
    async fn find_many(&self, ids: &[String]) -> Result<Vec<Doctor>, DatabaseError>;

    async fn insert(&self, doctor: &Doctor) -> Result<(), DatabaseError>;
}

#[async_trait]
pub trait AppointmentStore: Send + Sync {
    async fn list_for_patient(&self, patient_id: &str) -> Result<Vec<Appointment>, DatabaseError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Appointment>, DatabaseError>;

    /// Any appointment holding `key`, other than `exclude`.
    async fn find_booking(
        &self,
        key: &BookingKey,
        exclude: Option<&str>,
    ) -> Result<Option<Appointment>, DatabaseError>;

    /// Fails with `DuplicateKey` if another appointment already holds the same booking key.
    async fn insert(&self, appointment: &Appointment) -> Result<(), DatabaseError>;

    /// Returns whether a document matched `id`. Fails with `DuplicateKey` like `insert`.
    async fn update(&self, id: &str, changes: &AppointmentChanges) -> Result<bool, DatabaseError>;

    /// Returns whether a document was removed.
    async fn delete(&self, id: &str) -> Result<bool, DatabaseError>;
}

#[async_trait]
pub trait SlotStore: Send + Sync {
    /// Without a date, any slot held by `doctor` matches.
    async fn find(&self, doctor: &str, date: Option<&str>) -> Result<Option<Slot>, DatabaseError>;

    /// Number of stored slot documents for `(doctor, date)`.
    async fn count(&self, doctor: &str, date: &str) -> Result<u64, DatabaseError>;

    /// Overwrites the slot for `(doctor, date)` or creates it.
    async fn upsert(&self, request: &SlotUpsertRequest) -> Result<Slot, DatabaseError>;
}

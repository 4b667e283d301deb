use async_trait::async_trait;
use tokio::sync::RwLock;

use shared_models::{Appointment, AppointmentChanges, BookingKey, Doctor, Slot, SlotUpsertRequest};

use crate::error::DatabaseError;
use crate::store::{AppointmentStore, DoctorStore, SlotStore};
use crate::{new_id, parse_id};

#[derive(Default)]
struct Collections {
    doctors: Vec<Doctor>,
    appointments: Vec<Appointment>,
    slots: Vec<Slot>,
}

/// Process-local store with the same id rules and uniqueness guarantees as
/// the MongoDB collections. Used by tests and for running without a database.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

#[async_trait]
impl DoctorStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Doctor>, DatabaseError> {
        Ok(self.inner.read().await.doctors.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Doctor>, DatabaseError> {
        parse_id(id)?;
        let inner = self.inner.read().await;
        Ok(inner.doctors.iter().find(|d| d.id == id).cloned())
    }

    async fn find_many(&self, ids: &[String]) -> Result<Vec<Doctor>, DatabaseError> {
        for id in ids {
            parse_id(id)?;
        }
        let inner = self.inner.read().await;
        Ok(inner
            .doctors
            .iter()
            .filter(|d| ids.contains(&d.id))
            .cloned()
            .collect())
    }

    async fn insert(&self, doctor: &Doctor) -> Result<(), DatabaseError> {
        parse_id(&doctor.id)?;
        let mut inner = self.inner.write().await;
        if inner.doctors.iter().any(|d| d.id == doctor.id) {
            return Err(DatabaseError::DuplicateKey(format!("doctor {}", doctor.id)));
        }
        inner.doctors.push(doctor.clone());
        Ok(())
    }
}

fn holds_key(appointment: &Appointment, key: &BookingKey) -> bool {
    appointment.date == key.date
        && appointment.patient_id == key.patient_id
        && appointment.doctor == key.doctor
}

#[async_trait]
impl AppointmentStore for MemoryStore {
    async fn list_for_patient(&self, patient_id: &str) -> Result<Vec<Appointment>, DatabaseError> {
        let inner = self.inner.read().await;
        Ok(inner
            .appointments
            .iter()
            .filter(|a| a.patient_id == patient_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Appointment>, DatabaseError> {
        parse_id(id)?;
        let inner = self.inner.read().await;
        Ok(inner.appointments.iter().find(|a| a.id == id).cloned())
    }

    async fn find_booking(
        &self,
        key: &BookingKey,
        exclude: Option<&str>,
    ) -> Result<Option<Appointment>, DatabaseError> {
        parse_id(&key.doctor)?;
        if let Some(id) = exclude {
            parse_id(id)?;
        }

        let inner = self.inner.read().await;
        Ok(inner
            .appointments
            .iter()
            .find(|a| holds_key(a, key) && Some(a.id.as_str()) != exclude)
            .cloned())
    }

    async fn insert(&self, appointment: &Appointment) -> Result<(), DatabaseError> {
        parse_id(&appointment.id)?;
        parse_id(&appointment.doctor)?;

        let key = appointment.booking_key();
        let mut inner = self.inner.write().await;
        if inner.appointments.iter().any(|a| holds_key(a, &key)) {
            return Err(DatabaseError::DuplicateKey(format!("appointment on {}", key.date)));
        }
        inner.appointments.push(appointment.clone());
        Ok(())
    }

    async fn update(&self, id: &str, changes: &AppointmentChanges) -> Result<bool, DatabaseError> {
        parse_id(id)?;
        parse_id(&changes.doctor)?;

        let mut inner = self.inner.write().await;
        let Some(stored_date) = inner
            .appointments
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.date.clone())
        else {
            return Ok(false);
        };

        let key = changes.booking_key(&stored_date);
        if inner.appointments.iter().any(|a| a.id != id && holds_key(a, &key)) {
            return Err(DatabaseError::DuplicateKey(format!("appointment on {}", key.date)));
        }

        if let Some(appointment) = inner.appointments.iter_mut().find(|a| a.id == id) {
            appointment.apply(changes);
        }
        Ok(true)
    }

    async fn delete(&self, id: &str) -> Result<bool, DatabaseError> {
        parse_id(id)?;
        let mut inner = self.inner.write().await;
        let before = inner.appointments.len();
        inner.appointments.retain(|a| a.id != id);
        Ok(inner.appointments.len() < before)
    }
}

#[async_trait]
impl SlotStore for MemoryStore {
    async fn find(&self, doctor: &str, date: Option<&str>) -> Result<Option<Slot>, DatabaseError> {
        parse_id(doctor)?;
        let inner = self.inner.read().await;
        Ok(inner
            .slots
            .iter()
            .find(|s| s.doctor == doctor && date.map_or(true, |d| s.date == d))
            .cloned())
    }

    async fn count(&self, doctor: &str, date: &str) -> Result<u64, DatabaseError> {
        parse_id(doctor)?;
        let inner = self.inner.read().await;
        Ok(inner
            .slots
            .iter()
            .filter(|s| s.doctor == doctor && s.date == date)
            .count() as u64)
    }

    async fn upsert(&self, request: &SlotUpsertRequest) -> Result<Slot, DatabaseError> {
        parse_id(&request.doctor)?;
        let mut inner = self.inner.write().await;

        if let Some(slot) = inner
            .slots
            .iter_mut()
            .find(|s| s.doctor == request.doctor && s.date == request.date)
        {
            slot.slot = request.slot.clone();
            if let Some(booked) = request.booked {
                slot.booked = booked;
            }
            if let Some(total) = request.total {
                slot.total = Some(total);
            }
            return Ok(slot.clone());
        }

        let slot = Slot {
            id: new_id(),
            doctor: request.doctor.clone(),
            date: request.date.clone(),
            slot: request.slot.clone(),
            booked: request.booked.unwrap_or(0),
            total: request.total,
        };
        inner.slots.push(slot.clone());
        Ok(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::Utc;

    fn appointment(doctor: &str, date: &str) -> Appointment {
        let now = Utc::now();
        Appointment {
            id: new_id(),
            patient_id: "p1".into(),
            patient: "P".into(),
            date: date.into(),
            slot: "9-10".into(),
            status: "upcoming".into(),
            doctor: doctor.into(),
            created_by: "p1".into(),
            created_on: now,
            modified_on: now,
        }
    }

    #[tokio::test]
    async fn insert_rejects_a_second_booking_for_the_same_key() {
        let store = MemoryStore::default();
        let doctor = new_id();

        AppointmentStore::insert(&store, &appointment(&doctor, "2024-01-01"))
            .await
            .unwrap();
        let second = AppointmentStore::insert(&store, &appointment(&doctor, "2024-01-01")).await;

        assert_matches!(second, Err(DatabaseError::DuplicateKey(_)));
        assert_eq!(store.list_for_patient("p1").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn malformed_ids_fail_like_a_cast_error() {
        let store = MemoryStore::default();
        let result = AppointmentStore::find_by_id(&store, "not-an-id").await;
        assert_matches!(result, Err(DatabaseError::InvalidId(id)) if id == "not-an-id");
    }

    #[tokio::test]
    async fn upsert_keeps_booked_when_not_supplied() {
        let store = MemoryStore::default();
        let doctor = new_id();
        let mut request = SlotUpsertRequest {
            doctor: doctor.clone(),
            date: "2024-01-01".into(),
            slot: vec!["9-10".into()],
            booked: Some(2),
            total: None,
        };
        store.upsert(&request).await.unwrap();

        request.booked = None;
        request.slot = vec!["10-11".into()];
        let slot = store.upsert(&request).await.unwrap();

        assert_eq!(slot.booked, 2);
        assert_eq!(slot.slot, vec!["10-11".to_string()]);
    }
}

use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::TryStreamExt;
use mongodb::{
    error::{ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Client, Collection, IndexModel,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use shared_config::AppConfig;
use shared_models::{
    Appointment, AppointmentChanges, BookingKey, Doctor, Slot, SlotUpsertRequest,
    DEFAULT_APPOINTMENT_STATUS,
};

use crate::error::DatabaseError;
use crate::parse_id;
use crate::store::{AppointmentStore, DoctorStore, SlotStore};

pub const DOCTOR_COLLECTION: &str = "doctor";
pub const APPOINTMENT_COLLECTION: &str = "appointment";
pub const SLOT_COLLECTION: &str = "slot";

const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Clone)]
pub struct MongoStore {
    db: mongodb::Database,
}

impl MongoStore {
    pub async fn connect(config: &AppConfig) -> Result<Self, DatabaseError> {
        debug!("Connecting to MongoDB at {}", config.mongodb_uri);

        let client = Client::with_uri_str(&config.mongodb_uri).await?;
        let store = Self {
            db: client.database(&config.database_name),
        };

        // The driver connects lazily; ping so a bad URI fails at startup.
        store.ping().await?;
        Ok(store)
    }

    pub async fn ping(&self) -> Result<(), DatabaseError> {
        self.db.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }

    /// Unique `(date, patientId, doctor)` on appointments and `(doctor, date)` on slots.
    pub async fn ensure_indexes(&self) -> Result<(), DatabaseError> {
        self.ensure_unique_index(
            APPOINTMENT_COLLECTION,
            doc! { "date": 1, "patientId": 1, "doctor": 1 },
        )
        .await?;
        self.ensure_unique_index(SLOT_COLLECTION, doc! { "doctor": 1, "date": 1 })
            .await
    }

    async fn ensure_unique_index(&self, collection: &str, keys: Document) -> Result<(), DatabaseError> {
        let index = IndexModel::builder()
            .keys(keys.clone())
            .options(IndexOptions::builder().unique(true).build())
            .build();

        match self.db.collection::<Document>(collection).create_index(index, None).await {
            Ok(created) => {
                info!("Unique index {} ready on {}", created.index_name, collection);
                Ok(())
            }
            // Existing duplicate documents block the index; the handler pre-check still runs.
            Err(err) if is_duplicate_key(&err) => {
                warn!("Could not create unique index {:?} on {}: {}", keys, collection, err);
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn doctors(&self) -> MongoDoctors {
        MongoDoctors {
            collection: self.db.collection(DOCTOR_COLLECTION),
        }
    }

    pub fn appointments(&self) -> MongoAppointments {
        MongoAppointments {
            collection: self.db.collection(APPOINTMENT_COLLECTION),
        }
    }

    pub fn slots(&self) -> MongoSlots {
        MongoSlots {
            collection: self.db.collection(SLOT_COLLECTION),
        }
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

fn map_write_error(err: mongodb::error::Error, context: String) -> DatabaseError {
    if is_duplicate_key(&err) {
        DatabaseError::DuplicateKey(context)
    } else {
        DatabaseError::Mongo(err)
    }
}

// ==============================================================================
// DOCTORS
// ==============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct DoctorRecord {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    dept: String,
    ailments: Vec<String>,
    timing: Vec<String>,
    #[serde(default)]
    picture: String,
    #[serde(rename = "createdOn")]
    created_on: bson::DateTime,
}

impl From<DoctorRecord> for Doctor {
    fn from(record: DoctorRecord) -> Self {
        Self {
            id: record.id.to_hex(),
            name: record.name,
            dept: record.dept,
            ailments: record.ailments,
            timing: record.timing,
            picture: record.picture,
            created_on: record.created_on.to_chrono(),
        }
    }
}

impl TryFrom<&Doctor> for DoctorRecord {
    type Error = DatabaseError;

    fn try_from(doctor: &Doctor) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_id(&doctor.id)?,
            name: doctor.name.clone(),
            dept: doctor.dept.clone(),
            ailments: doctor.ailments.clone(),
            timing: doctor.timing.clone(),
            picture: doctor.picture.clone(),
            created_on: bson::DateTime::from_chrono(doctor.created_on),
        })
    }
}

#[derive(Clone)]
pub struct MongoDoctors {
    collection: Collection<DoctorRecord>,
}

#[async_trait]
impl DoctorStore for MongoDoctors {
    async fn list(&self) -> Result<Vec<Doctor>, DatabaseError> {
        let cursor = self.collection.find(doc! {}, None).await?;
        let records: Vec<DoctorRecord> = cursor.try_collect().await?;
        Ok(records.into_iter().map(Doctor::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Doctor>, DatabaseError> {
        let filter = doc! { "_id": parse_id(id)? };
        Ok(self.collection.find_one(filter, None).await?.map(Doctor::from))
    }

    async fn find_many(&self, ids: &[String]) -> Result<Vec<Doctor>, DatabaseError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids = ids
            .iter()
            .map(|id| parse_id(id))
            .collect::<Result<Vec<_>, _>>()?;

        let cursor = self.collection.find(doc! { "_id": { "$in": ids } }, None).await?;
        let records: Vec<DoctorRecord> = cursor.try_collect().await?;
        Ok(records.into_iter().map(Doctor::from).collect())
    }

    async fn insert(&self, doctor: &Doctor) -> Result<(), DatabaseError> {
        let record = DoctorRecord::try_from(doctor)?;
        self.collection
            .insert_one(&record, None)
            .await
            .map_err(|e| map_write_error(e, format!("doctor {}", doctor.id)))?;
        Ok(())
    }
}

// ==============================================================================
// APPOINTMENTS
// ==============================================================================

fn default_status() -> String {
    DEFAULT_APPOINTMENT_STATUS.to_string()
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppointmentRecord {
    #[serde(rename = "_id")]
    id: ObjectId,
    patient_id: String,
    patient: String,
    date: String,
    slot: String,
    #[serde(default = "default_status")]
    status: String,
    doctor: ObjectId,
    created_by: String,
    created_on: bson::DateTime,
    modified_on: bson::DateTime,
}

impl From<AppointmentRecord> for Appointment {
    fn from(record: AppointmentRecord) -> Self {
        Self {
            id: record.id.to_hex(),
            patient_id: record.patient_id,
            patient: record.patient,
            date: record.date,
            slot: record.slot,
            status: record.status,
            doctor: record.doctor.to_hex(),
            created_by: record.created_by,
            created_on: record.created_on.to_chrono(),
            modified_on: record.modified_on.to_chrono(),
        }
    }
}

impl TryFrom<&Appointment> for AppointmentRecord {
    type Error = DatabaseError;

    fn try_from(appointment: &Appointment) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_id(&appointment.id)?,
            patient_id: appointment.patient_id.clone(),
            patient: appointment.patient.clone(),
            date: appointment.date.clone(),
            slot: appointment.slot.clone(),
            status: appointment.status.clone(),
            doctor: parse_id(&appointment.doctor)?,
            created_by: appointment.created_by.clone(),
            created_on: bson::DateTime::from_chrono(appointment.created_on),
            modified_on: bson::DateTime::from_chrono(appointment.modified_on),
        })
    }
}

fn booking_filter(key: &BookingKey) -> Result<Document, DatabaseError> {
    Ok(doc! {
        "date": key.date.clone(),
        "patientId": key.patient_id.clone(),
        "doctor": parse_id(&key.doctor)?,
    })
}

#[derive(Clone)]
pub struct MongoAppointments {
    collection: Collection<AppointmentRecord>,
}

#[async_trait]
impl AppointmentStore for MongoAppointments {
    async fn list_for_patient(&self, patient_id: &str) -> Result<Vec<Appointment>, DatabaseError> {
        let cursor = self.collection.find(doc! { "patientId": patient_id }, None).await?;
        let records: Vec<AppointmentRecord> = cursor.try_collect().await?;
        Ok(records.into_iter().map(Appointment::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Appointment>, DatabaseError> {
        let filter = doc! { "_id": parse_id(id)? };
        Ok(self.collection.find_one(filter, None).await?.map(Appointment::from))
    }

    async fn find_booking(
        &self,
        key: &BookingKey,
        exclude: Option<&str>,
    ) -> Result<Option<Appointment>, DatabaseError> {
        let mut filter = booking_filter(key)?;
        if let Some(id) = exclude {
            filter.insert("_id", doc! { "$ne": parse_id(id)? });
        }

        Ok(self.collection.find_one(filter, None).await?.map(Appointment::from))
    }

    async fn insert(&self, appointment: &Appointment) -> Result<(), DatabaseError> {
        let record = AppointmentRecord::try_from(appointment)?;
        self.collection
            .insert_one(&record, None)
            .await
            .map_err(|e| map_write_error(e, format!("appointment on {}", appointment.date)))?;
        Ok(())
    }

    async fn update(&self, id: &str, changes: &AppointmentChanges) -> Result<bool, DatabaseError> {
        let filter = doc! { "_id": parse_id(id)? };

        let mut set = doc! {
            "patientId": changes.patient_id.clone(),
            "patient": changes.patient.clone(),
            "slot": changes.slot.clone(),
            "doctor": parse_id(&changes.doctor)?,
            "createdBy": changes.created_by.clone(),
            "modifiedOn": bson::DateTime::from_chrono(changes.modified_on),
        };
        if let Some(date) = &changes.date {
            set.insert("date", date.clone());
        }
        if let Some(status) = &changes.status {
            set.insert("status", status.clone());
        }

        let result = self
            .collection
            .update_one(filter, doc! { "$set": set }, None)
            .await
            .map_err(|e| map_write_error(e, format!("appointment {}", id)))?;

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &str) -> Result<bool, DatabaseError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": parse_id(id)? }, None)
            .await?;
        Ok(result.deleted_count > 0)
    }
}

// ==============================================================================
// SLOTS
// ==============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct SlotRecord {
    #[serde(rename = "_id")]
    id: ObjectId,
    doctor: ObjectId,
    date: String,
    slot: Vec<String>,
    #[serde(default)]
    booked: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    total: Option<i64>,
}

impl From<SlotRecord> for Slot {
    fn from(record: SlotRecord) -> Self {
        Self {
            id: record.id.to_hex(),
            doctor: record.doctor.to_hex(),
            date: record.date,
            slot: record.slot,
            booked: record.booked,
            total: record.total,
        }
    }
}

#[derive(Clone)]
pub struct MongoSlots {
    collection: Collection<SlotRecord>,
}

#[async_trait]
impl SlotStore for MongoSlots {
    async fn find(&self, doctor: &str, date: Option<&str>) -> Result<Option<Slot>, DatabaseError> {
        let mut filter = doc! { "doctor": parse_id(doctor)? };
        if let Some(date) = date {
            filter.insert("date", date);
        }
        Ok(self.collection.find_one(filter, None).await?.map(Slot::from))
    }

    async fn count(&self, doctor: &str, date: &str) -> Result<u64, DatabaseError> {
        let filter = doc! { "doctor": parse_id(doctor)?, "date": date };
        Ok(self.collection.count_documents(filter, None).await?)
    }

    async fn upsert(&self, request: &SlotUpsertRequest) -> Result<Slot, DatabaseError> {
        let filter = doc! { "doctor": parse_id(&request.doctor)?, "date": request.date.clone() };

        let mut set = doc! { "slot": request.slot.clone() };
        if let Some(booked) = request.booked {
            set.insert("booked", booked);
        }
        if let Some(total) = request.total {
            set.insert("total", total);
        }

        let mut update = doc! { "$set": set };
        if request.booked.is_none() {
            update.insert("$setOnInsert", doc! { "booked": 0_i64 });
        }

        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let record = self
            .collection
            .find_one_and_update(filter, update, options)
            .await
            .map_err(|e| map_write_error(e, format!("slot {} on {}", request.doctor, request.date)))?
            .ok_or_else(|| {
                DatabaseError::Unexpected(format!(
                    "upsert of slot {} on {} returned no document",
                    request.doctor, request.date
                ))
            })?;

        Ok(record.into())
    }
}

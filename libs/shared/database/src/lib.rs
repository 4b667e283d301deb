pub mod error;
pub mod memory;
pub mod mongo;
pub mod state;
pub mod store;

use bson::oid::ObjectId;

pub use error::DatabaseError;
pub use state::{AppState, Database};
pub use store::{AppointmentStore, DoctorStore, SlotStore};

/// Fresh document identifier, as the 24-digit hex string the API exposes.
pub fn new_id() -> String {
    ObjectId::new().to_hex()
}

pub fn parse_id(id: &str) -> Result<ObjectId, DatabaseError> {
    ObjectId::parse_str(id).map_err(|_| DatabaseError::InvalidId(id.to_string()))
}

use tracing::{debug, info, warn};

use shared_database::{AppState, Database, DatabaseError};
use shared_models::{Slot, SlotQuery, SlotUpsertRequest};

pub struct SlotService {
    db: Database,
}

impl SlotService {
    pub fn new(state: &AppState) -> Self {
        Self {
            db: state.db.clone(),
        }
    }

    pub async fn get_slot(&self, query: &SlotQuery) -> Result<Option<Slot>, DatabaseError> {
        debug!("Fetching slots for doctor {} on {:?}", query.id, query.date);
        self.db.slots().find(&query.id, query.date.as_deref()).await
    }

    /// One document per `(doctor, date)`: later calls overwrite earlier ones.
    /// `booked` is taken as given; callers that "book one more" must read it first.
    pub async fn upsert_slot(&self, request: &SlotUpsertRequest) -> Result<Slot, DatabaseError> {
        if let (Some(booked), Some(total)) = (request.booked, request.total) {
            if booked > total {
                warn!(
                    "Slot for doctor {} on {} stores booked={} above total={}",
                    request.doctor, request.date, booked, total
                );
            }
        }

        let slot = self.db.slots().upsert(request).await?;
        info!("Slot {} saved for doctor {} on {}", slot.id, slot.doctor, slot.date);
        Ok(slot)
    }
}

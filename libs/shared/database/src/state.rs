use std::sync::Arc;

use tracing::info;

use shared_config::AppConfig;

use crate::error::DatabaseError;
use crate::memory::MemoryStore;
use crate::mongo::MongoStore;
use crate::store::{AppointmentStore, DoctorStore, SlotStore};

#[derive(Clone)]
enum Backend {
    Mongo(MongoStore),
    Memory,
}

/// Handle to the three collections, cloned into every service.
#[derive(Clone)]
pub struct Database {
    doctors: Arc<dyn DoctorStore>,
    appointments: Arc<dyn AppointmentStore>,
    slots: Arc<dyn SlotStore>,
    backend: Backend,
}

impl Database {
    /// Connects to MongoDB and makes sure the uniqueness indexes exist.
    pub async fn connect(config: &AppConfig) -> Result<Self, DatabaseError> {
        let store = MongoStore::connect(config).await?;
        store.ensure_indexes().await?;
        info!("Successfully connected to MongoDB database {}", config.database_name);

        Ok(Self {
            doctors: Arc::new(store.doctors()),
            appointments: Arc::new(store.appointments()),
            slots: Arc::new(store.slots()),
            backend: Backend::Mongo(store),
        })
    }

    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::default());
        Self {
            doctors: store.clone(),
            appointments: store.clone(),
            slots: store,
            backend: Backend::Memory,
        }
    }

    pub fn doctors(&self) -> &dyn DoctorStore {
        self.doctors.as_ref()
    }

    pub fn appointments(&self) -> &dyn AppointmentStore {
        self.appointments.as_ref()
    }

    pub fn slots(&self) -> &dyn SlotStore {
        self.slots.as_ref()
    }

    pub fn backend_name(&self) -> &'static str {
        match self.backend {
            Backend::Mongo(_) => "mongodb",
            Backend::Memory => "memory",
        }
    }

    pub async fn ping(&self) -> Result<(), DatabaseError> {
        match &self.backend {
            Backend::Mongo(store) => store.ping().await,
            Backend::Memory => Ok(()),
        }
    }
}

/// Router state shared by every cell.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: Database,
}

impl AppState {
    pub fn new(config: AppConfig, db: Database) -> Self {
        Self {
            config: Arc::new(config),
            db,
        }
    }
}

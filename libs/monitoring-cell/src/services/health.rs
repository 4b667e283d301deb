// =====================================================================================
// HEALTH MONITORING SERVICE
// =====================================================================================

use std::time::Instant;
use tracing::{debug, error, instrument};

use crate::models::{HealthCheckResponse, HealthStatus, MonitoringError};
use shared_database::Database;

pub struct HealthMonitorService {
    start_time: Instant,
    db: Database,
    database_name: String,
}

impl HealthMonitorService {
    pub fn new(db: Database, database_name: impl Into<String>) -> Self {
        Self {
            start_time: Instant::now(),
            db,
            database_name: database_name.into(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    #[instrument(skip(self))]
    pub async fn check_database_health(&self) -> Result<HealthCheckResponse, MonitoringError> {
        let started = Instant::now();

        if let Err(err) = self.db.ping().await {
            error!("Database health check failed: {}", err);
            return Err(MonitoringError::DatabaseUnavailable(err.to_string()));
        }

        let response_time_ms = started.elapsed().as_millis() as u64;
        debug!("Database ping answered in {}ms", response_time_ms);

        Ok(HealthCheckResponse {
            status: HealthStatus::Healthy,
            database: "up".to_string(),
            backend: self.db.backend_name().to_string(),
            database_name: self.database_name.clone(),
            uptime_seconds: self.uptime_seconds(),
            response_time_ms,
            timestamp: chrono::Utc::now(),
        })
    }
}

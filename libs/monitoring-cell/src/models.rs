// =====================================================================================
// MONITORING CELL MODELS
// =====================================================================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: HealthStatus,
    pub database: String,
    pub backend: String,
    pub database_name: String,
    pub uptime_seconds: u64,
    pub response_time_ms: u64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Error)]
pub enum MonitoringError {
    #[error("Database unreachable: {0}")]
    DatabaseUnavailable(String),
}

// =====================================================================================
// MONITORING CELL - LIVENESS AND DATABASE HEALTH
// =====================================================================================

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{HealthCheckResponse, HealthStatus, MonitoringError};
pub use services::HealthMonitorService;
pub use router::create_monitoring_router;
pub use handlers::MonitoringHandlers;

// =====================================================================================
// MONITORING CELL HANDLERS
// =====================================================================================

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::instrument;

use crate::models::{HealthCheckResponse, HealthStatus, MonitoringError};
use crate::services::HealthMonitorService;
use shared_database::AppState;

pub struct MonitoringHandlers {
    health_service: Arc<HealthMonitorService>,
}

impl MonitoringHandlers {
    pub fn new(state: &AppState) -> Self {
        Self {
            health_service: Arc::new(HealthMonitorService::new(
                state.db.clone(),
                state.config.database_name.clone(),
            )),
        }
    }
}

#[instrument(skip(handlers))]
pub async fn get_health_status(
    State(handlers): State<Arc<MonitoringHandlers>>,
) -> Result<Json<HealthCheckResponse>, MonitoringError> {
    let health = handlers.health_service.check_database_health().await?;
    Ok(Json(health))
}

impl IntoResponse for MonitoringError {
    fn into_response(self) -> axum::response::Response {
        let message = self.to_string();

        (StatusCode::SERVICE_UNAVAILABLE, Json(serde_json::json!({
            "status": HealthStatus::Unhealthy,
            "database": "down",
            "message": message,
            "timestamp": chrono::Utc::now()
        }))).into_response()
    }
}

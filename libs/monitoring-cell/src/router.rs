// =====================================================================================
// MONITORING CELL ROUTER
// =====================================================================================

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::handlers::{get_health_status, MonitoringHandlers};
use shared_database::AppState;

pub fn create_monitoring_router(state: Arc<AppState>) -> Router {
    let handlers = Arc::new(MonitoringHandlers::new(&state));

    Router::new()
        .route("/health", get(get_health_status))
        .with_state(handlers)
}

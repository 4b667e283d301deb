use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use shared_database::AppState;

use crate::handlers;

/// Mounted under `/api`.
pub fn doctor_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/get/doctor-list", get(handlers::list_doctors))
        .route("/get/doctor/{doctor_id}", get(handlers::get_doctor))
        .route("/doctor/save", post(handlers::create_doctor))
        .with_state(state)
}

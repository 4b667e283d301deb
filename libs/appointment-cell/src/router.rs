// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use shared_database::AppState;

use crate::handlers;

/// Mounted under `/api`.
pub fn appointment_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/get/appointments/{patient_id}", get(handlers::get_patient_appointments))
        .route("/get/appointment/{appointment_id}", get(handlers::get_appointment))
        .route("/save/appointment", post(handlers::book_appointment))
        .route("/edit/appointment/{appointment_id}", put(handlers::update_appointment))
        .route("/delete/appointment/{appointment_id}", delete(handlers::cancel_appointment))
        .with_state(state)
}

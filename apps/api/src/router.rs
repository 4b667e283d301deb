use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use appointment_cell::router::appointment_routes;
use doctor_cell::router::doctor_routes;
use monitoring_cell::create_monitoring_router;
use shared_database::AppState;
use slot_cell::router::slot_routes;

const LANDING: &str = "Doctor Appointment API is running!";

async fn landing() -> &'static str {
    LANDING
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(doctor_routes(state.clone()))
        .merge(appointment_routes(state.clone()))
        .merge(slot_routes(state.clone()));

    Router::new()
        .route("/", get(landing))
        .nest("/api", api)
        .merge(create_monitoring_router(state))
        .fallback(landing)
}

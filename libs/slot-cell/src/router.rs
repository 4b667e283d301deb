use std::sync::Arc;

use axum::{
    Router,
    routing::{post, put},
};

use shared_database::AppState;

use crate::handlers;

/// Mounted under `/api`. The lookup is registered with and without the
/// trailing slash clients have historically used.
pub fn slot_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/get/slot/", post(handlers::get_slot))
        .route("/get/slot", post(handlers::get_slot))
        .route("/edit/slot", put(handlers::upsert_slot))
        .with_state(state)
}

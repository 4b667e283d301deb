use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use shared_database::AppState;
use shared_models::{error::AppError, SlotQuery, SlotUpsertRequest};
use shared_utils::extractor::JsonBody;

use crate::services::SlotService;

/// Body `{id, date}` where `id` is the doctor. Missing slots answer `data: null`.
#[axum::debug_handler]
pub async fn get_slot(
    State(state): State<Arc<AppState>>,
    JsonBody(query): JsonBody<SlotQuery>,
) -> Result<Json<Value>, AppError> {
    let slot_service = SlotService::new(&state);

    let slot = slot_service.get_slot(&query).await?;

    Ok(Json(json!({
        "data": slot,
        "status": "Success"
    })))
}

#[axum::debug_handler]
pub async fn upsert_slot(
    State(state): State<Arc<AppState>>,
    JsonBody(request): JsonBody<SlotUpsertRequest>,
) -> Result<Json<Value>, AppError> {
    let slot_service = SlotService::new(&state);

    slot_service.upsert_slot(&request).await?;

    Ok(Json(json!({
        "status": "success"
    })))
}

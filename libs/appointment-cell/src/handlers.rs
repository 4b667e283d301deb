use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_database::AppState;
use shared_models::{error::AppError, AppointmentRequest};
use shared_utils::extractor::JsonBody;

use crate::models::{already_booked_message, BookingOutcome};
use crate::services::{AppointmentBookingService, AppointmentService};

fn booked_response(date: &str) -> Json<Value> {
    Json(json!({
        "status": "booked",
        "message": already_booked_message(date)
    }))
}

#[axum::debug_handler]
pub async fn get_patient_appointments(
    State(state): State<Arc<AppState>>,
    Path(patient_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let appointment_service = AppointmentService::new(&state);

    let appointments = appointment_service.get_patient_appointments(&patient_id).await?;

    Ok(Json(json!({
        "data": appointments,
        "status": "Success"
    })))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<Arc<AppState>>,
    Path(appointment_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let appointment_service = AppointmentService::new(&state);

    let appointment = appointment_service.get_appointment(&appointment_id).await?;

    Ok(Json(json!({
        "data": appointment,
        "status": "success"
    })))
}

/// "Already booked" answers 200 with `status: "booked"`.
#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<AppState>>,
    JsonBody(request): JsonBody<AppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let booking_service = AppointmentBookingService::new(&state);

    match booking_service.book_appointment(request).await? {
        BookingOutcome::Accepted(appointment) => Ok(Json(json!({
            "status": "success",
            "message": "New Appointment added.",
            "data": appointment
        }))),
        BookingOutcome::AlreadyBooked { date } => Ok(booked_response(&date)),
    }
}

#[axum::debug_handler]
pub async fn update_appointment(
    State(state): State<Arc<AppState>>,
    Path(appointment_id): Path<String>,
    JsonBody(request): JsonBody<AppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let booking_service = AppointmentBookingService::new(&state);

    match booking_service.update_appointment(&appointment_id, request).await? {
        BookingOutcome::Accepted(_) => Ok(Json(json!({
            "status": "success",
            "message": "Appointment updated successfully."
        }))),
        BookingOutcome::AlreadyBooked { date } => Ok(booked_response(&date)),
    }
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<Arc<AppState>>,
    Path(appointment_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let appointment_service = AppointmentService::new(&state);

    appointment_service.cancel_appointment(&appointment_id).await?;

    Ok(Json(json!({
        "status": "success",
        "message": "Appointment cancelled successfully."
    })))
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Every failure the API reports. All of them surface as HTTP 500 with
/// `{status: "error", message}`; "already booked" and "not found" are not errors.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn message(&self) -> &str {
        match self {
            AppError::Database(msg)
            | AppError::ValidationError(msg)
            | AppError::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;

        tracing::error!("Error: {}: {}", status, self);

        let body = Json(json!({
            "status": "error",
            "message": self.message()
        }));

        (status, body).into_response()
    }
}

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use tracing::debug;

use shared_models::error::AppError;

/// `Json<T>` whose rejection is reported like any other failure:
/// HTTP 500 with `{status: "error", message}`. A body missing a required
/// field therefore fails the same way a rejected database write would.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                debug!("Rejected request body: {}", rejection.body_text());
                Err(AppError::ValidationError(rejection.body_text()))
            }
        }
    }
}

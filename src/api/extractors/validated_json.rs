//! JSON extractor that validates the payload before the handler runs.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use serde_json::json;
use validator::Validate;

use crate::error::AppError;

/// Deserializes a JSON body and runs its `validator` rules.
///
/// Malformed JSON, a missing `Content-Type` or a failed rule all become
/// `400 Bad Request` with the standard error body.
///
/// # Example
///
/// ```rust,ignore
/// async fn create_genre(
///     State(state): State<AppState>,
///     ValidatedJson(payload): ValidatedJson<CreateGenreRequest>,
/// ) -> Result<(StatusCode, Json<GenreResponse>), AppError> {
///     // payload.title is guaranteed non-empty here
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| {
                AppError::bad_request("Invalid request body", json!({ "reason": e.body_text() }))
            })?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

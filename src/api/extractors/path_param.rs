//! Path extractor that reports bad parameters in the standard error body.

use axum::{
    extract::{FromRequestParts, Path, rejection::PathRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::AppError;

/// Like [`Path`], but a parameter that fails to parse (`/books/abc`) becomes
/// `400 Bad Request` with `{"error": "Invalid path parameter", "details": ...}`.
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e: PathRejection| {
                AppError::bad_request(
                    "Invalid path parameter",
                    json!({ "reason": e.body_text() }),
                )
            })?;

        Ok(PathParam(value))
    }
}

use crate::error::AppError;
use axum::http::Uri;
use serde_json::json;

/// Unmatched paths. Mounted behind the auth layer so unknown routes do not
/// reveal themselves to unauthenticated callers.
pub async fn fallback_handler(uri: Uri) -> AppError {
    AppError::not_found("Not found", json!({ "path": uri.path() }))
}

//! Application error type and its HTTP mapping.
//!
//! Every handler returns `Result<_, AppError>`. The response body is always
//! `{"error": "<message>"}`, with an optional `details` object for
//! validation and constraint failures.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

/// Error body returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,

    #[serde(skip_serializing_if = "Value::is_null")]
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    Unauthorized { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    Conflict { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            AppError::Internal { message, details } => {
                tracing::error!(%message, %details, "Request failed with internal error");
                ErrorBody {
                    error: "Internal server error".to_string(),
                    details: Value::Null,
                }
            }
            AppError::Unauthorized { message, .. } => {
                return (
                    status,
                    [(header::WWW_AUTHENTICATE, "Bearer")],
                    Json(ErrorBody {
                        error: message,
                        details: Value::Null,
                    }),
                )
                    .into_response();
            }
            AppError::NotFound { message, details } => {
                tracing::debug!(%message, %details, "Record not found");
                ErrorBody {
                    error: message,
                    details: Value::Null,
                }
            }
            AppError::Validation { message, details }
            | AppError::Conflict { message, details } => ErrorBody {
                error: message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Validation failed",
            serde_json::to_value(&e).unwrap_or(Value::Null),
        )
    }
}

/// Maps database errors onto client-facing categories.
///
/// Unique violations (a duplicate book/genre pair) become 409, foreign key
/// violations (a missing book, genre or menu) become 400. Everything else
/// is a 500 with the cause kept for the server log.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            return AppError::conflict(
                "Record already exists",
                json!({ "constraint": db.constraint() }),
            );
        }

        if db.is_foreign_key_violation() {
            return AppError::bad_request(
                "Referenced record does not exist",
                json!({ "constraint": db.constraint() }),
            );
        }

        if db.is_check_violation() {
            return AppError::bad_request(
                "Value violates a table constraint",
                json!({ "constraint": db.constraint() }),
            );
        }
    }

    AppError::internal("Database error", json!({ "cause": e.to_string() }))
}

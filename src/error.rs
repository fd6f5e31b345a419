//! Application-wide error type and its HTTP translation.
//!
//! Every failure surfaced to a client is rendered as the same envelope:
//!
//! ```json
//! { "date": "2025-01-01T12:00:00Z", "exceptionMessage": "Address with this id doesn't exist" }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Postgres SQLSTATE codes reported to clients as bad requests.
const FOREIGN_KEY_VIOLATION: &str = "23503";
const CHECK_VIOLATION: &str = "23514";
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

/// Error body returned for every failed request.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    /// Moment the error was produced.
    pub date: DateTime<Utc>,
    /// Human-readable description of the failure.
    pub exception_message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A requested record (or a referenced one) does not exist. Maps to 404.
    #[error("{0}")]
    NotFound(String),

    /// The request is well-formed but cannot be honoured. Maps to 400.
    #[error("{0}")]
    BadRequest(String),

    /// DTO field validation failed. Maps to 400.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// An argument could not be interpreted, e.g. an unknown enum label. Maps to 400.
    #[error("Enum: {0}")]
    IllegalArgument(String),

    /// Unexpected failure. Maps to 500; the message is logged, not returned.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Self::IllegalArgument(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation(_) | AppError::IllegalArgument(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the JSON envelope for this error.
    pub fn to_details(&self) -> ErrorDetails {
        let exception_message = match self {
            AppError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        ErrorDetails {
            date: Utc::now(),
            exception_message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        (status, Json(self.to_details())).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return AppError::bad_request(match db.constraint() {
                    Some("ticket_info_attraction_id_key") => {
                        "Attraction already has ticket info".to_string()
                    }
                    Some(constraint) => format!("Unique constraint violation: {constraint}"),
                    None => "Unique constraint violation".to_string(),
                });
            }

            match db.code().as_deref() {
                Some(FOREIGN_KEY_VIOLATION) => {
                    return AppError::bad_request("Referenced record does not exist");
                }
                Some(CHECK_VIOLATION) => {
                    return AppError::bad_request(match db.constraint() {
                        Some(constraint) => format!("Check constraint violation: {constraint}"),
                        None => "Check constraint violation".to_string(),
                    });
                }
                Some(NUMERIC_VALUE_OUT_OF_RANGE) => {
                    return AppError::bad_request("Numeric value out of range");
                }
                _ => {}
            }
        }

        AppError::internal(format!("Database error: {e}"))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(describe_validation_errors(&errors))
    }
}

/// Flattens validator output into `field: message; field: message`, sorted by field.
fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut parts = Vec::new();
    collect_validation_messages("", errors, &mut parts);
    parts.sort();
    parts.join("; ")
}

fn collect_validation_messages(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("invalid value ({})", error.code));
                    out.push(format!("{path}: {message}"));
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_validation_messages(&path, nested, out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_validation_messages(&format!("{path}[{index}]"), nested, out);
                }
            }
        }
    }
}

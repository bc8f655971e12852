//! Application error type and its HTTP representation.
//!
//! Every failure in the service is expressed as an [`AppError`]. Handlers return
//! `Result<_, AppError>` and axum turns the error into a JSON body of the form:
//!
//! ```json
//! { "error": "Link not found" }
//! ```
//!
//! A `details` object is attached when the error carries extra context.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// JSON body returned for every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,

    #[serde(skip_serializing_if = "is_empty_details")]
    pub details: Value,
}

fn is_empty_details(details: &Value) -> bool {
    match details {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed URL, bad code format, or an unreadable request body.
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The short code is already taken.
    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// Every generated candidate collided with an existing code.
    #[error("Failed to generate unique code")]
    GenerationExhausted { attempts: usize },

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

    /// The canonical "no such link" error.
    ///
    /// Used for missing codes and for redirect codes with an invalid format, so
    /// both cases look the same to the caller.
    pub fn link_not_found() -> Self {
        Self::not_found("Link not found", Value::Null)
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::GenerationExhausted { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Converts the error into its serializable body.
    pub fn to_error_body(&self) -> ErrorBody {
        let details = match self {
            AppError::Validation { details, .. }
            | AppError::NotFound { details, .. }
            | AppError::Conflict { details, .. } => details.clone(),
            // Internal context stays in the logs.
            AppError::GenerationExhausted { .. } | AppError::Internal { .. } => Value::Null,
        };

        ErrorBody {
            error: self.to_string(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Internal { message, details } => {
                tracing::error!(%message, %details, "Request failed with internal error");
            }
            AppError::GenerationExhausted { attempts } => {
                tracing::error!(attempts, "Short code generation exhausted");
            }
            _ => {}
        }

        (self.status_code(), Json(self.to_error_body())).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Short code already exists",
                json!({ "constraint": db.constraint() }),
            );
        }

        if matches!(e, sqlx::Error::RowNotFound) {
            return AppError::link_not_found();
        }

        AppError::internal("Internal server error", json!({ "source": e.to_string() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());

        let details = serde_json::to_value(&errors).unwrap_or(Value::Null);

        AppError::bad_request(message, details)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid JSON body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

/// A path segment that cannot be decoded can never name a stored link, so it
/// is reported exactly like a missing one.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Undecodable path parameter");
        AppError::link_not_found()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("bad", Value::Null).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::link_not_found().status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::conflict("taken", Value::Null).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::GenerationExhausted { attempts: 10 }.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::internal("boom", Value::Null).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_body_has_message() {
        let body = AppError::link_not_found().to_error_body();
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json, json!({ "error": "Link not found" }));
    }

    #[test]
    fn test_error_body_includes_details_when_present() {
        let body = AppError::conflict("Short code already exists", json!({ "code": "abc123" }))
            .to_error_body();
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["error"], "Short code already exists");
        assert_eq!(json["details"]["code"], "abc123");
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let body =
            AppError::internal("Internal server error", json!({ "source": "pool timed out" }))
                .to_error_body();
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json, json!({ "error": "Internal server error" }));
    }

    #[test]
    fn test_generation_exhausted_message() {
        let err = AppError::GenerationExhausted { attempts: 10 };
        assert_eq!(err.to_string(), "Failed to generate unique code");
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[test]
    fn test_pool_error_maps_to_internal() {
        let err: AppError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, AppError::Internal { .. }));
    }
}

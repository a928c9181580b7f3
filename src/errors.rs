// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Each variant maps to an HTTP status code and a JSON error body
#[derive(Error, Debug)]
pub enum PlacesError {
    /// No DATABASE_URL was configured, so there is no persistence handle
    #[error("Database not configured")]
    DatabaseNotConfigured,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl PlacesError {
    fn code(&self) -> &'static str {
        match self {
            PlacesError::DatabaseNotConfigured => "DATABASE_NOT_CONFIGURED",
            PlacesError::DatabaseError(_) => "DATABASE_ERROR",
            PlacesError::ValidationError(_) => "VALIDATION_ERROR",
            PlacesError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for PlacesError {
    fn from(err: serde_json::Error) -> Self {
        PlacesError::InternalError(format!("document serialization failed: {}", err))
    }
}

impl From<validator::ValidationErrors> for PlacesError {
    fn from(err: validator::ValidationErrors) -> Self {
        PlacesError::ValidationError(err.to_string())
    }
}

/// Convert PlacesError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for PlacesError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            PlacesError::DatabaseNotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            PlacesError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PlacesError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            PlacesError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

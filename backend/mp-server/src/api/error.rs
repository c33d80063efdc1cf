//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use mp_core::{FieldViolation, ValidationError};
use mp_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field details
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// First violated field, for clients that only show one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Every violated field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldViolation>>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        violations: Vec<FieldViolation>,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                    details: None,
                },
            ),
            ApiError::Validation {
                message,
                violations,
                ..
            } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field: violations.first().map(|v| v.field.clone()),
                    details: Some(violations),
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                    details: None,
                },
            ),
            ApiError::BadRequest { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "BAD_REQUEST".into(),
                    message,
                    field: None,
                    details: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert schema violations to API errors
impl From<ValidationError> for ApiError {
    #[track_caller]
    fn from(e: ValidationError) -> Self {
        ApiError::Validation {
            message: format!("Invalid {}", e.entity),
            violations: e.violations,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert storage errors to API errors.
///
/// The underlying failure text is passed through to the client.
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        ApiError::Internal {
            message: e.detail(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Malformed JSON, wrong content type, unreadable body
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    #[track_caller]
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        message: format!("No route for {}", uri.path()),
        location: ErrorLocation::from(Location::caller()),
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

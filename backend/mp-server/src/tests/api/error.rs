use crate::ApiError;

use mp_core::{FieldViolation, validate_contact_message};
use mp_db::DbError;

use std::panic::Location;

use axum::response::{IntoResponse, Response};
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;
use serde_json::json;

async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "No route for /nope".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "No route for /nope");
    assert!(json["error"].get("details").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_first_field_and_details() {
    let error = ApiError::Validation {
        message: "Invalid ContactMessage".into(),
        violations: vec![
            FieldViolation::new("email", "is required"),
            FieldViolation::new("message", "is required"),
        ],
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "email");
    assert_eq!(json["error"]["details"].as_array().unwrap().len(), 2);
    assert_eq!(json["error"]["details"][1]["field"], "message");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "disk I/O error".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "disk I/O error");
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let error = ApiError::BadRequest {
        message: "Expected request with `Content-Type: application/json`".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[test]
fn test_from_validation_error_names_entity() {
    let validation = validate_contact_message(&json!({"name": "Ada"})).unwrap_err();

    let error = ApiError::from(validation);

    match error {
        ApiError::Validation {
            message,
            violations,
            ..
        } => {
            assert_eq!(message, "Invalid ContactMessage");
            assert_eq!(violations.len(), 2);
        }
        other => panic!("expected Validation, got {:?}", other),
    }
}

#[test]
fn test_from_db_error_keeps_detail_without_location() {
    let error = ApiError::from(DbError::unavailable("Database not available"));

    match error {
        ApiError::Internal { message, .. } => assert_eq!(message, "Database not available"),
        other => panic!("expected Internal, got {:?}", other),
    }
}

//! Contact form REST API handler

use crate::{ApiResult, AppState, ContactResponse};

use mp_core::{ContactMessage, validate_contact_message};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::Value;

/// POST /api/contact
///
/// Client errors are raised before the store is touched.
pub async fn create_contact(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<ContactResponse>> {
    let Json(raw) = body?;

    // 1. Validate shape
    let message = validate_contact_message(&raw)?;

    // 2. Store
    let store = state.database.store()?;
    let id = store
        .create_document(ContactMessage::COLLECTION, message.into_fields())
        .await?;

    log::info!("Stored contact message {}", id);

    Ok(Json(ContactResponse::ok(id)))
}

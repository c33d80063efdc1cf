use axum::Json;
use serde_json::{Value, json};

pub const ROOT_MESSAGE: &str = "Merch Portfolio API running";

/// GET / - Fixed status payload, never fails
pub async fn root() -> Json<Value> {
    Json(json!({ "message": ROOT_MESSAGE }))
}

use mp_core::validate_design;
use mp_db::Document;
use mp_db::document::ID_FIELD;

use serde::Serialize;
use serde_json::{Map, Value};

/// Design DTO for JSON serialization.
///
/// Fields are emitted exactly as stored; only `_id` and the timestamps are
/// rendered as strings.
#[derive(Debug, Serialize)]
pub struct DesignDto {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl DesignDto {
    /// `None` when the stored document is not a valid design
    pub fn from_document(document: Document) -> Option<Self> {
        let id = document.id.clone();
        let raw = Value::Object(document.into_json());

        if let Err(e) = validate_design(&raw) {
            log::warn!("Skipping design {}: {}", id, e);
            return None;
        }

        let Value::Object(mut fields) = raw else {
            return None;
        };
        fields.remove(ID_FIELD);

        Some(Self { id, fields })
    }
}

use serde::Serialize;

/// Response for an accepted contact message
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub status: String,
    /// Identifier assigned by the document store
    pub id: String,
}

impl ContactResponse {
    pub fn ok(id: String) -> Self {
        Self {
            status: "ok".to_string(),
            id,
        }
    }
}

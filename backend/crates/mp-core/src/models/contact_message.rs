use serde::Serialize;
use serde_json::{Map, Value};

/// Message submitted through the contact form. Write-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub const COLLECTION: &'static str = "contactmessage";
    pub const ENTITY: &'static str = "ContactMessage";

    /// Document fields as stored in the `contactmessage` collection
    pub fn into_fields(self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("name".into(), Value::String(self.name));
        fields.insert("email".into(), Value::String(self.email));
        fields.insert("message".into(), Value::String(self.message));
        fields
    }
}

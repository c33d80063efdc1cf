use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

/// Key holding the store-assigned identifier
pub const ID_FIELD: &str = "_id";
pub const CREATED_AT_FIELD: &str = "created_at";
pub const UPDATED_AT_FIELD: &str = "updated_at";

/// Keys owned by the store; stripped from caller data on insert
pub const RESERVED_FIELDS: [&str; 3] = [ID_FIELD, CREATED_AT_FIELD, UPDATED_AT_FIELD];

/// A stored document: caller-supplied fields plus store metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Opaque identifier assigned on creation
    pub id: String,
    pub fields: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Render as a flat JSON object.
    ///
    /// `_id` becomes a string and the timestamps become ISO-8601 strings.
    pub fn into_json(self) -> Map<String, Value> {
        let mut object = self.fields;
        object.insert(ID_FIELD.into(), Value::String(self.id));
        object.insert(
            CREATED_AT_FIELD.into(),
            Value::String(iso8601(&self.created_at)),
        );
        object.insert(
            UPDATED_AT_FIELD.into(),
            Value::String(iso8601(&self.updated_at)),
        );
        object
    }
}

pub fn iso8601(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

/// Equality filter over top-level document fields. Empty matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentFilter {
    conditions: Map<String, Value>,
}

impl DocumentFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.insert(field.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn conditions(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.conditions.iter()
    }
}

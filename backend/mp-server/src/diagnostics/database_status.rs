use std::fmt;

use serde::{Serialize, Serializer};

/// Longest error excerpt embedded in a status
pub const MAX_STATUS_ERROR_CHARS: usize = 50;

/// Database availability as reported by `/test`.
///
/// Serialized as the display strings clients already parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseStatus {
    NotAvailable,
    Uninitialized,
    Connected,
    ConnectedWithError(String),
}

impl DatabaseStatus {
    /// Builds `ConnectedWithError`, keeping at most 50 characters of `error`
    pub fn connected_with_error(error: &str) -> Self {
        DatabaseStatus::ConnectedWithError(truncate_chars(error, MAX_STATUS_ERROR_CHARS))
    }
}

impl fmt::Display for DatabaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseStatus::NotAvailable => write!(f, "❌ Not Available"),
            DatabaseStatus::Uninitialized => write!(f, "⚠️  Available but not initialized"),
            DatabaseStatus::Connected => write!(f, "✅ Connected & Working"),
            DatabaseStatus::ConnectedWithError(e) => write!(f, "⚠️  Connected but Error: {}", e),
        }
    }
}

impl Serialize for DatabaseStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

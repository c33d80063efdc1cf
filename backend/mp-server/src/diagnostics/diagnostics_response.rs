use crate::DatabaseStatus;

use serde::Serialize;

pub const BACKEND_RUNNING: &str = "✅ Running";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConnectionStatus {
    #[serde(rename = "Connected")]
    Connected,
    #[serde(rename = "Not Connected")]
    NotConnected,
}

/// Whether an environment variable is set; the value itself is never reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EnvPresence {
    #[serde(rename = "✅ Set")]
    Set,
    #[serde(rename = "❌ Not Set")]
    NotSet,
}

impl EnvPresence {
    /// Empty values count as not set
    pub fn of(var_name: &str) -> Self {
        match std::env::var_os(var_name) {
            Some(value) if !value.is_empty() => EnvPresence::Set,
            _ => EnvPresence::NotSet,
        }
    }
}

/// GET /test payload
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: &'static str,
    pub database: DatabaseStatus,
    pub database_url: EnvPresence,
    pub database_name: EnvPresence,
    pub connection_status: ConnectionStatus,
    /// Name of the database behind the store, when there is one
    pub connected_database: Option<String>,
    /// At most 10 collection names
    pub collections: Vec<String>,
}

impl Default for DiagnosticsResponse {
    fn default() -> Self {
        Self {
            backend: BACKEND_RUNNING,
            database: DatabaseStatus::NotAvailable,
            database_url: EnvPresence::NotSet,
            database_name: EnvPresence::NotSet,
            connection_status: ConnectionStatus::NotConnected,
            connected_database: None,
            collections: Vec::new(),
        }
    }
}

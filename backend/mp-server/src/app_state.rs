use mp_config::DatabaseConfig;
use mp_db::{DbError, DocumentStore, Result as DbErrorResult, SqliteDocumentStore};

use std::sync::Arc;

use log::{error, info, warn};

/// Shared application state, cloned into every handler
#[derive(Clone)]
pub struct AppState {
    pub database: DatabaseHandle,
}

impl AppState {
    pub fn new(database: DatabaseHandle) -> Self {
        Self { database }
    }
}

/// The document store, if one could be set up at startup
#[derive(Clone)]
pub enum DatabaseHandle {
    /// `DATABASE_URL` or `DATABASE_NAME` is missing
    Unconfigured,
    /// Configuration was present but the store could not be built
    Failed(String),
    Ready(Arc<dyn DocumentStore>),
}

impl DatabaseHandle {
    /// Build the store from configuration. Never fails: problems are kept
    /// in the handle and reported per request.
    pub fn from_config(config: &DatabaseConfig) -> Self {
        let Some((url, name)) = config.connection() else {
            warn!("DATABASE_URL/DATABASE_NAME not set, running without a database");
            return DatabaseHandle::Unconfigured;
        };

        match SqliteDocumentStore::connect_lazy(url, name, config.max_connections) {
            Ok(store) => {
                info!("Document store '{}' ready (connects on first use)", name);
                DatabaseHandle::Ready(Arc::new(store))
            }
            Err(e) => {
                error!("Failed to set up document store: {}", e);
                DatabaseHandle::Failed(e.detail())
            }
        }
    }

    pub fn ready(store: impl DocumentStore + 'static) -> Self {
        DatabaseHandle::Ready(Arc::new(store))
    }

    /// The store, or `DbError::Unavailable` explaining why there is none
    #[track_caller]
    pub fn store(&self) -> DbErrorResult<&Arc<dyn DocumentStore>> {
        match self {
            DatabaseHandle::Ready(store) => Ok(store),
            DatabaseHandle::Unconfigured => Err(DbError::unavailable(
                "Database not available. Check DATABASE_URL and DATABASE_NAME environment variables",
            )),
            DatabaseHandle::Failed(message) => Err(DbError::unavailable(format!(
                "Database not available: {}",
                message
            ))),
        }
    }
}

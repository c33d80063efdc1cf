//! Connectivity diagnostics.
//!
//! Every failure is reported as data; the endpoint itself always answers 200.

use crate::{
    AppState, ConnectionStatus, DatabaseHandle, DatabaseStatus, DiagnosticsResponse, EnvPresence,
};

use mp_config::{DATABASE_NAME_ENV, DATABASE_URL_ENV};

use axum::{Json, extract::State};

pub const MAX_REPORTED_COLLECTIONS: usize = 10;

/// GET /test
pub async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let mut response = DiagnosticsResponse::default();

    match &state.database {
        DatabaseHandle::Unconfigured => {
            response.database = DatabaseStatus::Uninitialized;
        }
        DatabaseHandle::Failed(message) => {
            log::warn!("Diagnostics: document store unavailable: {}", message);
            response.database = DatabaseStatus::NotAvailable;
        }
        DatabaseHandle::Ready(store) => {
            response.connection_status = ConnectionStatus::Connected;
            response.connected_database = Some(store.name().to_string());

            match store.list_collection_names().await {
                Ok(names) => {
                    response.collections = names
                        .into_iter()
                        .take(MAX_REPORTED_COLLECTIONS)
                        .collect();
                    response.database = DatabaseStatus::Connected;
                }
                Err(e) => {
                    log::warn!("Diagnostics: listing collections failed: {}", e);
                    response.database = DatabaseStatus::connected_with_error(&e.detail());
                }
            }
        }
    }

    response.database_url = EnvPresence::of(DATABASE_URL_ENV);
    response.database_name = EnvPresence::of(DATABASE_NAME_ENV);

    Json(response)
}

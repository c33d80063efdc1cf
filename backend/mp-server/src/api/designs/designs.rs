//! Design REST API handlers
//!
//! Listing never fails: any storage problem degrades to an empty list.

use crate::{AppState, ApiResult, DesignDto, DesignListResponse, ListDesignsQuery};

use mp_core::Design;
use mp_db::{DocumentFilter, Result as DbErrorResult};

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

/// GET /api/designs?limit=N
pub async fn list_designs(
    State(state): State<AppState>,
    query: Result<Query<ListDesignsQuery>, QueryRejection>,
) -> ApiResult<Json<DesignListResponse>> {
    let Query(query) = query?;
    let limit = query.effective_limit();

    match fetch_designs(&state, limit).await {
        Ok(items) => Ok(Json(DesignListResponse { items })),
        Err(e) => {
            log::warn!("Listing designs failed, returning empty list: {}", e);
            Ok(Json(DesignListResponse::empty()))
        }
    }
}

/// Reads pages until `limit` valid designs are collected or the collection
/// runs out. Invalid documents do not count against the limit.
async fn fetch_designs(state: &AppState, limit: u64) -> DbErrorResult<Vec<DesignDto>> {
    let store = state.database.store()?;
    let filter = DocumentFilter::all();

    let mut items = Vec::new();
    let mut skip = 0u64;

    while (items.len() as u64) < limit {
        let wanted = limit - items.len() as u64;
        let page = store
            .get_documents(Design::COLLECTION, &filter, skip, wanted)
            .await?;

        // Undecodable rows are dropped by the store, so only an empty page
        // proves the end of the collection.
        if page.is_empty() {
            break;
        }

        items.extend(page.into_iter().filter_map(DesignDto::from_document));
        skip = skip.saturating_add(wanted);
    }

    Ok(items)
}

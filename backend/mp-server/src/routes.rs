use crate::{AppState, api::error::not_found, create_contact, diagnostics, list_designs, root};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/test", get(diagnostics))
        .route("/api/designs", get(list_designs))
        .route("/api/contact", post(create_contact))
        .fallback(not_found)
        .with_state(state)
        .layer(cors_layer())
}

/// Any origin, method and header, with credentials.
///
/// Credentials rule out the `*` wildcard, so each request is mirrored back.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

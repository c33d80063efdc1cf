#![allow(dead_code)]

//! Test infrastructure for mp-server API tests

use mp_db::{DbError, Document, DocumentFilter, DocumentStore, Result as DbErrorResult, SqliteDocumentStore};
use mp_server::{AppState, DatabaseHandle, build_router};

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use serde_json::{Map, Value, json};
use tower::ServiceExt;

pub const TEST_DATABASE_NAME: &str = "merch_test";
pub const FAILURE_MESSAGE: &str = "disk I/O error";

/// SQLite store over an in-memory database, for tests that need the pool
pub fn create_sqlite_test_store() -> Arc<SqliteDocumentStore> {
    // In-memory needs single connection
    let store = SqliteDocumentStore::connect_lazy("sqlite::memory:", TEST_DATABASE_NAME, 1)
        .expect("Failed to create test store");
    Arc::new(store)
}

pub fn create_test_store() -> Arc<dyn DocumentStore> {
    create_sqlite_test_store()
}

/// AppState backed by a fresh store, plus the store for seeding and inspection
pub fn create_test_app_state() -> (AppState, Arc<dyn DocumentStore>) {
    let store = create_test_store();
    let state = AppState::new(DatabaseHandle::Ready(store.clone()));
    (state, store)
}

pub fn create_failing_app_state() -> AppState {
    AppState::new(DatabaseHandle::ready(FailingDocumentStore))
}

pub fn create_unconfigured_app_state() -> AppState {
    AppState::new(DatabaseHandle::Unconfigured)
}

/// Store whose every operation fails
pub struct FailingDocumentStore;

#[async_trait]
impl DocumentStore for FailingDocumentStore {
    fn name(&self) -> &str {
        TEST_DATABASE_NAME
    }

    async fn create_document(
        &self,
        _collection: &str,
        _data: Map<String, Value>,
    ) -> DbErrorResult<String> {
        Err(DbError::unavailable(FAILURE_MESSAGE))
    }

    async fn get_documents(
        &self,
        _collection: &str,
        _filter: &DocumentFilter,
        _skip: u64,
        _limit: u64,
    ) -> DbErrorResult<Vec<Document>> {
        Err(DbError::unavailable(FAILURE_MESSAGE))
    }

    async fn list_collection_names(&self) -> DbErrorResult<Vec<String>> {
        Err(DbError::unavailable(FAILURE_MESSAGE))
    }
}

/// Insert a valid design titled `title`
pub async fn create_test_design(store: &Arc<dyn DocumentStore>, title: &str) -> String {
    insert(
        store,
        "design",
        json!({
            "title": title,
            "image_url": format!("https://cdn.example.com/{}.png", title.to_lowercase().replace(' ', "-")),
            "tags": ["test"],
            "colors": ["black"]
        }),
    )
    .await
}

pub async fn insert(store: &Arc<dyn DocumentStore>, collection: &str, value: Value) -> String {
    let Value::Object(fields) = value else {
        panic!("expected a JSON object");
    };
    store
        .create_document(collection, fields)
        .await
        .expect("Failed to insert test document")
}

pub async fn all_documents(store: &Arc<dyn DocumentStore>, collection: &str) -> Vec<Document> {
    store
        .get_documents(collection, &DocumentFilter::all(), 0, 1000)
        .await
        .expect("Failed to read test documents")
}

/// Send one request through a fresh router
pub async fn send(state: AppState, request: Request<Body>) -> Response<Body> {
    let app: Router = build_router(state);
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

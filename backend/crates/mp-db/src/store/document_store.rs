//! Document store abstraction used by the HTTP handlers.

use crate::{Document, DocumentFilter, Result as DbErrorResult};

use async_trait::async_trait;
use serde_json::{Map, Value};

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Name of the database backing this store
    fn name(&self) -> &str;

    /// Insert one document and return its assigned identifier.
    ///
    /// Stamps `created_at`/`updated_at` and creates the collection on first write.
    async fn create_document(
        &self,
        collection: &str,
        data: Map<String, Value>,
    ) -> DbErrorResult<String>;

    /// Documents matching `filter`, in insertion order, reading at most
    /// `limit` stored rows after skipping the first `skip`.
    ///
    /// Rows that cannot be decoded are logged and left out, so fewer than
    /// `limit` documents may come back before the collection is exhausted.
    /// A collection that was never written to yields no documents.
    async fn get_documents(
        &self,
        collection: &str,
        filter: &DocumentFilter,
        skip: u64,
        limit: u64,
    ) -> DbErrorResult<Vec<Document>>;

    /// Names of existing collections, sorted
    async fn list_collection_names(&self) -> DbErrorResult<Vec<String>>;
}

pub mod document;
pub mod error;
pub mod store;

pub use document::{Document, DocumentFilter};
pub use error::{DbError, Result};
pub use store::document_store::DocumentStore;
pub use store::sqlite_document_store::SqliteDocumentStore;

pub mod document_store;
pub mod sqlite_document_store;

//! SQLite-backed document store.
//!
//! Each collection is a table holding one JSON document per row:
//!
//! ```sql
//! CREATE TABLE "<collection>" (
//!     _id        TEXT PRIMARY KEY NOT NULL,
//!     document   TEXT NOT NULL,      -- JSON object, store metadata stripped
//!     created_at INTEGER NOT NULL,   -- unix seconds, UTC
//!     updated_at INTEGER NOT NULL
//! )
//! ```
//!
//! Tables are created on first insert. Natural order is `rowid` order.

use crate::document::{ID_FIELD, RESERVED_FIELDS};
use crate::{DbError, Document, DocumentFilter, DocumentStore, Result as DbErrorResult};

use std::panic::Location;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde_json::{Map, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const MAX_COLLECTION_NAME_LENGTH: usize = 64;

pub struct SqliteDocumentStore {
    pool: SqlitePool,
    name: String,
}

impl SqliteDocumentStore {
    pub fn new(pool: SqlitePool, name: impl Into<String>) -> Self {
        Self {
            pool,
            name: name.into(),
        }
    }

    /// Build a store from a `sqlite:` URL without opening a connection.
    ///
    /// Only URL parsing can fail here; an unreachable database file surfaces
    /// as a `DbError::Sqlx` on the first operation.
    pub fn connect_lazy(url: &str, name: &str, max_connections: u32) -> DbErrorResult<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_lazy_with(options);

        Ok(Self::new(pool, name))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn ensure_collection(&self, collection: &str) -> DbErrorResult<()> {
        let sql = format!(
            r#"
                CREATE TABLE IF NOT EXISTS "{collection}" (
                    _id TEXT PRIMARY KEY NOT NULL,
                    document TEXT NOT NULL,
                    created_at INTEGER NOT NULL,
                    updated_at INTEGER NOT NULL
                )
            "#
        );
        sqlx::query(&sql).execute(&self.pool).await?;
        Ok(())
    }

    async fn collection_exists(&self, collection: &str) -> DbErrorResult<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?")
                .bind(collection)
                .fetch_one(&self.pool)
                .await?;
        Ok(count > 0)
    }

    fn document_from_row(collection: &str, row: &SqliteRow) -> DbErrorResult<Document> {
        let id: String = row.try_get("_id")?;
        let raw: String = row.try_get("document")?;
        let created_at: i64 = row.try_get("created_at")?;
        let updated_at: i64 = row.try_get("updated_at")?;

        let corrupt = |message: String| DbError::CorruptDocument {
            collection: collection.to_string(),
            id: id.clone(),
            message,
            location: ErrorLocation::from(Location::caller()),
        };

        let fields = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(fields)) => fields,
            Ok(_) => return Err(corrupt("document is not a JSON object".to_string())),
            Err(e) => return Err(corrupt(format!("invalid JSON: {}", e))),
        };

        let created_at = timestamp(created_at)
            .ok_or_else(|| corrupt("invalid timestamp in created_at".to_string()))?;
        let updated_at = timestamp(updated_at)
            .ok_or_else(|| corrupt("invalid timestamp in updated_at".to_string()))?;

        Ok(Document {
            id,
            fields,
            created_at,
            updated_at,
        })
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn create_document(
        &self,
        collection: &str,
        mut data: Map<String, Value>,
    ) -> DbErrorResult<String> {
        validate_collection_name(collection)?;
        self.ensure_collection(collection).await?;

        for reserved in RESERVED_FIELDS {
            data.remove(reserved);
        }

        let id = Uuid::new_v4().to_string();
        let now = Utc::now().timestamp();
        let document = serde_json::to_string(&data)?;

        let sql = format!(
            r#"INSERT INTO "{collection}" (_id, document, created_at, updated_at) VALUES (?, ?, ?, ?)"#
        );
        sqlx::query(&sql)
            .bind(&id)
            .bind(document)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await?;

        log::debug!("Inserted document {} into {}", id, collection);

        Ok(id)
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: &DocumentFilter,
        skip: u64,
        limit: u64,
    ) -> DbErrorResult<Vec<Document>> {
        validate_collection_name(collection)?;

        if !self.collection_exists(collection).await? {
            return Ok(Vec::new());
        }

        let mut sql = format!(
            r#"SELECT _id, document, created_at, updated_at FROM "{collection}" WHERE 1 = 1"#
        );
        for (field, _) in filter.conditions() {
            if field == ID_FIELD {
                sql.push_str(" AND _id = ?");
            } else {
                sql.push_str(" AND json_extract(document, ?) = json_extract(?, '$')");
            }
        }
        sql.push_str(" ORDER BY rowid LIMIT ? OFFSET ?");

        let mut query = sqlx::query(&sql);
        for (field, value) in filter.conditions() {
            if field == ID_FIELD {
                let id = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                query = query.bind(id);
            } else {
                query = query.bind(json_path(field)).bind(value.to_string());
            }
        }
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let skip = i64::try_from(skip).unwrap_or(i64::MAX);
        let rows = query.bind(limit).bind(skip).fetch_all(&self.pool).await?;

        let documents = rows
            .iter()
            .filter_map(|row| match Self::document_from_row(collection, row) {
                Ok(document) => Some(document),
                Err(e) => {
                    log::warn!("Skipping undecodable row: {}", e);
                    None
                }
            })
            .collect();

        Ok(documents)
    }

    async fn list_collection_names(&self) -> DbErrorResult<Vec<String>> {
        let names: Vec<String> = sqlx::query_scalar(
            r#"
                SELECT name FROM sqlite_master
                WHERE type = 'table' AND name NOT LIKE 'sqlite\_%' ESCAPE '\'
                ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(names)
    }
}

/// Collection names are interpolated into SQL, so only `[A-Za-z0-9_]` is allowed
#[track_caller]
fn validate_collection_name(name: &str) -> DbErrorResult<()> {
    let valid = !name.is_empty()
        && name.len() <= MAX_COLLECTION_NAME_LENGTH
        && !name.starts_with("sqlite_")
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Ok(())
    } else {
        Err(DbError::InvalidCollection {
            name: name.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

fn json_path(field: &str) -> String {
    format!("$.\"{}\"", field.replace('"', ""))
}

fn timestamp(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
}

//! Document-oriented persistence adapter
//!
//! Wraps the connection pool behind a small collection-of-documents
//! contract so the service layer never touches rows or SQL. Documents are
//! JSONB payloads grouped by collection name; identifiers are UUIDs
//! assigned by the store on insert.

use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::{PgPool, Row};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum StoreError {
    #[error("{0}")]
    Backend(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// A persisted document together with its store-assigned identifier.
#[derive(Debug, Clone)]
pub struct StoredDocument {
    pub id: Uuid,
    pub payload: Value,
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Durably store `payload` in `collection`, returning the new identifier.
    async fn create_document(&self, collection: &str, payload: Value) -> Result<Uuid, StoreError>;

    /// Fetch documents from `collection` whose payload contains every
    /// key/value pair of `filter` (an empty filter matches everything),
    /// in insertion order, capped at `limit`.
    async fn get_documents(
        &self,
        collection: &str,
        filter: &Map<String, Value>,
        limit: i64,
    ) -> Result<Vec<StoredDocument>, StoreError>;

    /// Cheap reachability probe against the backing store.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Postgres-backed document store keeping one JSONB row per document.
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn create_document(&self, collection: &str, payload: Value) -> Result<Uuid, StoreError> {
        let row =
            sqlx::query("INSERT INTO documents (collection, payload) VALUES ($1, $2) RETURNING id")
                .bind(collection)
                .bind(&payload)
                .fetch_one(&self.pool)
                .await?;

        Ok(row.get("id"))
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: &Map<String, Value>,
        limit: i64,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        // `@>` with an empty object matches every document, so one
        // containment query covers the filtered and unfiltered case alike.
        let rows = sqlx::query(
            "SELECT id, payload FROM documents \
             WHERE collection = $1 AND payload @> $2 \
             ORDER BY seq LIMIT $3",
        )
        .bind(collection)
        .bind(Value::Object(filter.clone()))
        .bind(limit.max(0))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| StoredDocument {
                id: row.get("id"),
                payload: row.get("payload"),
            })
            .collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

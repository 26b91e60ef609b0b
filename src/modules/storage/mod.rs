//! Storage module for document persistence
//!
//! Provides the collection-of-documents contract the service layer writes
//! and reads through, plus its Postgres-backed implementation.

mod document_store;

pub use document_store::{DocumentStore, PgDocumentStore, StoreError, StoredDocument};

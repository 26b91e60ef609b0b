#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::Mutex;

#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use serde_json::{Map, Value};
#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
use crate::modules::storage::{DocumentStore, StoreError, StoredDocument};

/// In-memory document store preserving insertion order per collection.
#[cfg(test)]
#[derive(Default)]
pub struct InMemoryDocumentStore {
    collections: Mutex<HashMap<String, Vec<StoredDocument>>>,
}

#[cfg(test)]
impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document_count(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .map(|docs| docs.len())
            .unwrap_or(0)
    }
}

#[cfg(test)]
#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn create_document(&self, collection: &str, payload: Value) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument { id, payload });
        Ok(id)
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: &Map<String, Value>,
        limit: i64,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        let collections = self.collections.lock().unwrap();
        let docs = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| {
                        filter
                            .iter()
                            .all(|(key, value)| doc.payload.get(key) == Some(value))
                    })
                    .take(limit.max(0) as usize)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(docs)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Document store double whose every operation fails, for exercising the
/// persistence error paths.
#[cfg(test)]
pub struct FailingDocumentStore;

#[cfg(test)]
#[async_trait]
impl DocumentStore for FailingDocumentStore {
    async fn create_document(
        &self,
        _collection: &str,
        _payload: Value,
    ) -> Result<Uuid, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn get_documents(
        &self,
        _collection: &str,
        _filter: &Map<String, Value>,
        _limit: i64,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

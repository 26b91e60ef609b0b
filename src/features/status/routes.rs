use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::status::handlers;
use crate::modules::storage::DocumentStore;

/// Create routes for the status feature
pub fn routes(store: Arc<dyn DocumentStore>) -> Router {
    Router::new()
        .route("/test", get(handlers::store_status))
        .with_state(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{FailingDocumentStore, InMemoryDocumentStore};
    use axum_test::TestServer;
    use serde_json::Value;

    #[tokio::test]
    async fn test_reachable_store_reports_ok() {
        let store: Arc<dyn DocumentStore> = Arc::new(InMemoryDocumentStore::new());
        let server = TestServer::new(routes(store)).unwrap();

        let response = server.get("/test").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["ok"], true);
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn test_unreachable_store_reports_error_with_status_200() {
        let store: Arc<dyn DocumentStore> = Arc::new(FailingDocumentStore);
        let server = TestServer::new(routes(store)).unwrap();

        let response = server.get("/test").await;
        // Must stay 200 even when the store is down
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["ok"], false);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("store unavailable"));
    }
}

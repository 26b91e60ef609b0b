use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::locations::handlers;
use crate::features::locations::services::LocationCatalog;

/// Create routes for the locations feature
///
/// Note: This feature is public (no authentication required).
pub fn routes(catalog: Arc<LocationCatalog>) -> Router {
    Router::new()
        .route("/locations", get(handlers::list_locations))
        .with_state(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use serde_json::Value;

    #[tokio::test]
    async fn test_list_locations_returns_fixed_set() {
        let server = TestServer::new(routes(Arc::new(LocationCatalog::demo()))).unwrap();

        let response = server.get("/locations").await;
        response.assert_status_ok();

        let body: Value = response.json();
        let items = body.as_array().expect("bare JSON array");
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["name"], "BodyScan @ CityFit Rondo ONZ");
        assert_eq!(items[0]["club_brand"], "CityFit");
        assert_eq!(items[2]["city"], "Gdańsk");
    }

    #[tokio::test]
    async fn test_list_locations_is_stable_across_calls() {
        let server = TestServer::new(routes(Arc::new(LocationCatalog::demo()))).unwrap();

        let first: Value = server.get("/locations").await.json();
        let second: Value = server.get("/locations").await.json();
        assert_eq!(first, second);
    }
}

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::bookings::handlers;
use crate::features::bookings::services::BookingService;

/// Create routes for the bookings feature
///
/// Note: This feature is public (no authentication required).
pub fn routes(service: Arc<BookingService>) -> Router {
    Router::new()
        .route("/book", post(handlers::create_booking))
        .route("/bookings", get(handlers::list_bookings))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::BOOKING_COLLECTION;
    use crate::shared::test_helpers::{FailingDocumentStore, InMemoryDocumentStore};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::Name;
    use fake::Fake;
    use serde_json::{json, Value};

    fn server_with_store(store: Arc<InMemoryDocumentStore>) -> TestServer {
        TestServer::new(routes(Arc::new(BookingService::new(store)))).unwrap()
    }

    fn booking_payload(location_id: &str) -> Value {
        let full_name: String = Name().fake();
        let email: String = SafeEmail().fake();
        json!({
            "location_id": location_id,
            "full_name": full_name,
            "email": email,
            "date": "2025-01-20",
            "time": "18:30",
            "test_package": "InBody"
        })
    }

    #[tokio::test]
    async fn test_book_returns_ok_envelope_with_id() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let server = server_with_store(Arc::clone(&store));

        let response = server
            .post("/book")
            .json(&booking_payload("cityfit-rondo-onz"))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
        assert!(!body["id"].as_str().unwrap().is_empty());
        assert_eq!(store.document_count(BOOKING_COLLECTION), 1);
    }

    #[tokio::test]
    async fn test_book_then_list_round_trip() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let server = server_with_store(store);

        let payload = booking_payload("zdrofit-ursynow");
        let created: Value = server.post("/book").json(&payload).await.json();

        let response = server
            .get("/bookings")
            .add_query_param("location_id", "zdrofit-ursynow")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        let items = body["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], created["id"]);
        assert_eq!(items[0]["full_name"], payload["full_name"]);
        assert_eq!(items[0]["email"], payload["email"]);
        assert_eq!(items[0]["test_package"], "InBody");
    }

    #[tokio::test]
    async fn test_book_missing_required_field_is_client_error() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let server = server_with_store(Arc::clone(&store));

        let mut payload = booking_payload("cityfit-rondo-onz");
        payload.as_object_mut().unwrap().remove("email");

        let response = server.post("/book").json(&payload).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = response.json();
        assert!(body["detail"].as_str().unwrap().contains("email"));
        // Nothing may be persisted for a rejected submission
        assert_eq!(store.document_count(BOOKING_COLLECTION), 0);
    }

    #[tokio::test]
    async fn test_book_invalid_email_is_client_error() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let server = server_with_store(Arc::clone(&store));

        let mut payload = booking_payload("cityfit-rondo-onz");
        payload["email"] = json!("not-an-email");

        let response = server.post("/book").json(&payload).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(store.document_count(BOOKING_COLLECTION), 0);
    }

    #[tokio::test]
    async fn test_bookings_listing_respects_limit() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let server = server_with_store(store);

        for _ in 0..3 {
            server
                .post("/book")
                .json(&booking_payload("cityfit-rondo-onz"))
                .await
                .assert_status_ok();
        }

        let body: Value = server
            .get("/bookings")
            .add_query_param("limit", 1)
            .await
            .json();
        assert_eq!(body["items"].as_array().unwrap().len(), 1);

        let body: Value = server.get("/bookings").await.json();
        assert_eq!(body["items"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_bookings_unknown_location_returns_empty_list() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let server = server_with_store(store);

        server
            .post("/book")
            .json(&booking_payload("cityfit-rondo-onz"))
            .await
            .assert_status_ok();

        let response = server
            .get("/bookings")
            .add_query_param("location_id", "nowhere")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["items"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_store_failure_maps_to_500_with_detail() {
        let server =
            TestServer::new(routes(Arc::new(BookingService::new(Arc::new(
                FailingDocumentStore,
            )))))
            .unwrap();

        let response = server
            .post("/book")
            .json(&booking_payload("cityfit-rondo-onz"))
            .await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = response.json();
        assert!(body["detail"]
            .as_str()
            .unwrap()
            .contains("store unavailable"));

        let response = server.get("/bookings").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }
}

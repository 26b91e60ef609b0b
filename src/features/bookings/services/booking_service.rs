use std::sync::Arc;

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::bookings::dtos::{BookingRecordDto, CreateBookingDto};
use crate::features::bookings::models::Booking;
use crate::modules::storage::DocumentStore;
use crate::shared::constants::BOOKING_COLLECTION;

/// Service recording and querying scan bookings
pub struct BookingService {
    store: Arc<dyn DocumentStore>,
}

impl BookingService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Record a new booking, returning the store-assigned identifier.
    pub async fn create(&self, dto: CreateBookingDto) -> Result<Uuid> {
        let booking = Booking::from(dto);
        let payload = serde_json::to_value(&booking)
            .map_err(|e| AppError::Internal(format!("Failed to serialize booking: {}", e)))?;

        let id = self.store.create_document(BOOKING_COLLECTION, payload).await?;

        tracing::info!(
            "Booking created: id={}, location_id={}",
            id,
            booking.location_id
        );
        Ok(id)
    }

    /// List stored bookings, optionally restricted to one location.
    pub async fn list(
        &self,
        location_id: Option<&str>,
        limit: i64,
    ) -> Result<Vec<BookingRecordDto>> {
        let mut filter = Map::new();
        if let Some(location_id) = location_id {
            filter.insert(
                "location_id".to_string(),
                Value::String(location_id.to_string()),
            );
        }

        let documents = self
            .store
            .get_documents(BOOKING_COLLECTION, &filter, limit)
            .await?;

        documents
            .into_iter()
            .map(|doc| {
                let booking: Booking = serde_json::from_value(doc.payload).map_err(|e| {
                    tracing::error!("Malformed booking document {}: {}", doc.id, e);
                    AppError::Internal(format!("Malformed booking document: {}", e))
                })?;
                Ok(booking.into_record(doc.id))
            })
            .collect()
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::features::bookings::dtos::{BookingRecordDto, CreateBookingDto};

/// Persisted shape of a booking document.
///
/// Stored verbatim as the document payload. `location_id` is taken on
/// trust; nothing checks it against the location catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub location_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date: String,
    pub time: String,
    pub test_package: String,
}

impl Booking {
    /// Attach the store-assigned identifier for the listing response.
    pub fn into_record(self, id: Uuid) -> BookingRecordDto {
        BookingRecordDto {
            id: id.to_string(),
            location_id: self.location_id,
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            date: self.date,
            time: self.time,
            test_package: self.test_package,
        }
    }
}

impl From<CreateBookingDto> for Booking {
    fn from(dto: CreateBookingDto) -> Self {
        Self {
            location_id: dto.location_id,
            full_name: dto.full_name,
            email: dto.email,
            phone: dto.phone,
            date: dto.date,
            time: dto.time,
            test_package: dto.test_package,
        }
    }
}

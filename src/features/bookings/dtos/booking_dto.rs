use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::shared::constants::DEFAULT_BOOKINGS_LIMIT;

/// Request DTO for submitting a booking
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateBookingDto {
    /// Club/location identifier
    #[validate(length(min = 1, message = "location_id must not be empty"))]
    pub location_id: String,

    #[validate(length(min = 1, message = "full_name must not be empty"))]
    pub full_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Optional contact phone
    pub phone: Option<String>,

    /// ISO date string, e.g. 2025-01-20 (calendar validity is not checked)
    #[validate(length(min = 1, message = "date must not be empty"))]
    pub date: String,

    /// HH:mm time
    #[validate(length(min = 1, message = "time must not be empty"))]
    pub time: String,

    /// Offering name: InBody | Performance x4 | Full + AI Report
    #[validate(length(min = 1, message = "test_package must not be empty"))]
    pub test_package: String,
}

/// A stored booking together with its identifier
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingRecordDto {
    pub id: String,
    pub location_id: String,
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub date: String,
    pub time: String,
    pub test_package: String,
}

/// Response body for a successful booking submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingCreatedDto {
    pub status: String,
    pub id: String,
}

impl BookingCreatedDto {
    pub fn ok(id: String) -> Self {
        Self {
            status: "ok".to_string(),
            id,
        }
    }
}

/// Response body for the bookings listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingListDto {
    pub items: Vec<BookingRecordDto>,
}

/// Query parameters for the bookings listing
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct BookingListQuery {
    /// Restrict results to bookings for one location
    pub location_id: Option<String>,

    /// Maximum number of bookings returned (default: 100)
    #[serde(default = "default_limit")]
    #[param(minimum = 0)]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_BOOKINGS_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> serde_json::Value {
        serde_json::json!({
            "location_id": "cityfit-rondo-onz",
            "full_name": "Jan Kowalski",
            "email": "jan.kowalski@example.com",
            "phone": "+48 600 100 200",
            "date": "2025-01-20",
            "time": "18:30",
            "test_package": "InBody"
        })
    }

    #[test]
    fn test_create_booking_dto_deserialize() {
        let dto: CreateBookingDto = serde_json::from_value(valid_payload()).unwrap();
        assert_eq!(dto.location_id, "cityfit-rondo-onz");
        assert_eq!(dto.phone.as_deref(), Some("+48 600 100 200"));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_booking_dto_phone_is_optional() {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("phone");

        let dto: CreateBookingDto = serde_json::from_value(payload).unwrap();
        assert!(dto.phone.is_none());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_booking_dto_missing_required_field() {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("email");

        assert!(serde_json::from_value::<CreateBookingDto>(payload).is_err());
    }

    #[test]
    fn test_create_booking_dto_rejects_bad_email() {
        let mut payload = valid_payload();
        payload["email"] = serde_json::json!("not-an-email");

        let dto: CreateBookingDto = serde_json::from_value(payload).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_booking_list_query_limit_defaults() {
        let query: BookingListQuery = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(query.limit, DEFAULT_BOOKINGS_LIMIT);
        assert!(query.location_id.is_none());
    }
}

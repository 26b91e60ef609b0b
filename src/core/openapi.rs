use utoipa::{Modify, OpenApi};

use crate::core::error::ErrorBody;
use crate::features::bookings::{dtos as bookings_dtos, handlers as bookings_handlers};
use crate::features::locations::{dtos as locations_dtos, handlers as locations_handlers};
use crate::features::status::{dtos as status_dtos, handlers as status_handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Status (public)
        status_handlers::store_status,
        // Locations (public)
        locations_handlers::list_locations,
        // Bookings (public)
        bookings_handlers::create_booking,
        bookings_handlers::list_bookings,
    ),
    components(
        schemas(
            // Shared
            ErrorBody,
            // Status
            status_dtos::StoreStatusDto,
            // Locations
            locations_dtos::LocationResponseDto,
            // Bookings
            bookings_dtos::CreateBookingDto,
            bookings_dtos::BookingRecordDto,
            bookings_dtos::BookingCreatedDto,
            bookings_dtos::BookingListDto,
        )
    ),
    tags(
        (name = "status", description = "Document store reachability probe"),
        (name = "locations", description = "Scan location catalog (public)"),
        (name = "bookings", description = "Booking submission and lookup (public)"),
    ),
    info(
        title = "BodyScan API",
        version = "1.0.0",
        description = "Booking API for BodyScan body-composition scans",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

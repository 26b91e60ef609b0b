use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, ErrorBody, Result};
use crate::core::extractor::AppJson;
use crate::features::bookings::dtos::{
    BookingCreatedDto, BookingListDto, BookingListQuery, CreateBookingDto,
};
use crate::features::bookings::services::BookingService;

/// Submit a booking
///
/// Records the booking as-is; no double-booking or calendar checks are made.
#[utoipa::path(
    post,
    path = "/book",
    request_body = CreateBookingDto,
    responses(
        (status = 200, description = "Booking recorded", body = BookingCreatedDto),
        (status = 422, description = "Malformed booking payload", body = ErrorBody),
        (status = 500, description = "Store write failed", body = ErrorBody)
    ),
    tag = "bookings"
)]
pub async fn create_booking(
    State(service): State<Arc<BookingService>>,
    AppJson(dto): AppJson<CreateBookingDto>,
) -> Result<Json<BookingCreatedDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let id = service.create(dto).await?;
    Ok(Json(BookingCreatedDto::ok(id.to_string())))
}

/// List stored bookings
#[utoipa::path(
    get,
    path = "/bookings",
    params(BookingListQuery),
    responses(
        (status = 200, description = "Stored bookings", body = BookingListDto),
        (status = 500, description = "Store read failed", body = ErrorBody)
    ),
    tag = "bookings"
)]
pub async fn list_bookings(
    State(service): State<Arc<BookingService>>,
    Query(query): Query<BookingListQuery>,
) -> Result<Json<BookingListDto>> {
    let items = service
        .list(query.location_id.as_deref(), query.limit)
        .await?;
    Ok(Json(BookingListDto { items }))
}

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::features::locations::dtos::LocationResponseDto;
use crate::features::locations::services::LocationCatalog;

/// List all scan locations
///
/// Returns the full fixed set as a bare array, in stable order. The catalog
/// is read-only, so this endpoint has no failure path.
#[utoipa::path(
    get,
    path = "/locations",
    responses(
        (status = 200, description = "All scan locations", body = Vec<LocationResponseDto>),
    ),
    tag = "locations"
)]
pub async fn list_locations(
    State(catalog): State<Arc<LocationCatalog>>,
) -> Json<Vec<LocationResponseDto>> {
    Json(catalog.list().iter().map(Into::into).collect())
}

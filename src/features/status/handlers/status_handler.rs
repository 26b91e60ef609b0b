use std::sync::Arc;

use axum::{extract::State, Json};

use crate::features::status::dtos::StoreStatusDto;
use crate::modules::storage::DocumentStore;

/// Check that the document store is reachable
///
/// Never propagates an error outward; a failed probe is reported in the
/// body of a 200 response.
#[utoipa::path(
    get,
    path = "/test",
    responses(
        (status = 200, description = "Reachability result", body = StoreStatusDto),
    ),
    tag = "status"
)]
pub async fn store_status(State(store): State<Arc<dyn DocumentStore>>) -> Json<StoreStatusDto> {
    match store.ping().await {
        Ok(()) => Json(StoreStatusDto {
            ok: true,
            error: None,
        }),
        Err(e) => {
            tracing::warn!("Store reachability check failed: {}", e);
            Json(StoreStatusDto {
                ok: false,
                error: Some(e.to_string()),
            })
        }
    }
}

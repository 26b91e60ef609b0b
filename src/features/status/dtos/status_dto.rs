use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response DTO for the store reachability probe
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StoreStatusDto {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response DTO for a scan location
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocationResponseDto {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub address: String,
    pub city: String,
    /// Partner gym chain operating the site, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club_brand: Option<String>,
}

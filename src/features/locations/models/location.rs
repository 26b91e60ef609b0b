use serde::{Deserialize, Serialize};

use crate::features::locations::dtos::LocationResponseDto;

/// A fixed physical site where scans take place
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub address: String,
    pub city: String,
    pub club_brand: Option<String>,
}

impl From<&Location> for LocationResponseDto {
    fn from(l: &Location) -> Self {
        Self {
            name: l.name.clone(),
            lat: l.lat,
            lng: l.lng,
            address: l.address.clone(),
            city: l.city.clone(),
            club_brand: l.club_brand.clone(),
        }
    }
}

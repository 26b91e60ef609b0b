use crate::features::locations::models::Location;

/// Read-only catalog of scan locations.
///
/// Holds the full set for the process lifetime. Every call to [`list`]
/// returns the same locations in the same order.
///
/// [`list`]: LocationCatalog::list
pub struct LocationCatalog {
    locations: Vec<Location>,
}

impl LocationCatalog {
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    /// Demo dataset served until locations move into the database.
    pub fn demo() -> Self {
        Self::new(vec![
            Location {
                name: "BodyScan @ CityFit Rondo ONZ".to_string(),
                lat: 52.233,
                lng: 20.999,
                address: "al. Jana Pawła II 18".to_string(),
                city: "Warszawa".to_string(),
                club_brand: Some("CityFit".to_string()),
            },
            Location {
                name: "BodyScan @ Zdrofit Ursynów".to_string(),
                lat: 52.154,
                lng: 21.045,
                address: "ul. KEN 36".to_string(),
                city: "Warszawa".to_string(),
                club_brand: Some("Zdrofit".to_string()),
            },
            Location {
                name: "BodyScan @ Pure Jatomi Gdańsk".to_string(),
                lat: 54.352,
                lng: 18.646,
                address: "ul. Długa 10".to_string(),
                city: "Gdańsk".to_string(),
                club_brand: Some("Jatomi".to_string()),
            },
        ])
    }

    /// Full catalog, in fixed order.
    pub fn list(&self) -> &[Location] {
        &self.locations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_is_non_empty() {
        let catalog = LocationCatalog::demo();
        assert_eq!(catalog.list().len(), 3);
    }

    #[test]
    fn test_demo_catalog_order_is_stable() {
        let first = LocationCatalog::demo();
        let second = LocationCatalog::demo();

        let first_names: Vec<&str> = first.list().iter().map(|l| l.name.as_str()).collect();
        let second_names: Vec<&str> = second.list().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(first_names, second_names);
        assert_eq!(first_names[0], "BodyScan @ CityFit Rondo ONZ");
    }

    #[test]
    fn test_repeated_list_calls_return_same_set() {
        let catalog = LocationCatalog::demo();
        let a: Vec<String> = catalog.list().iter().map(|l| l.name.clone()).collect();
        let b: Vec<String> = catalog.list().iter().map(|l| l.name.clone()).collect();
        assert_eq!(a, b);
    }
}

use serde::{Deserialize, Serialize};

/// A point on the map. Serialized as `[lat, lng]`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Location {
    lat: f64,
    lng: f64,
}

impl Location {
    pub const fn from_lat_lng(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<[f64; 2]> for Location {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Location::from_lat_lng(lat, lng)
    }
}

impl From<Location> for [f64; 2] {
    fn from(location: Location) -> Self {
        [location.lat, location.lng]
    }
}

impl From<&Location> for geo::Point<f64> {
    fn from(location: &Location) -> Self {
        geo::Point::new(location.lng, location.lat)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_is_lng_lat() {
        let location = Location::from_lat_lng(32.0853, 34.7818);
        let point: geo::Point = (&location).into();

        assert_eq!(point.x(), 34.7818);
        assert_eq!(point.y(), 32.0853);
    }

    #[test]
    fn test_validity() {
        assert!(Location::from_lat_lng(32.0, 34.0).is_valid());
        assert!(!Location::from_lat_lng(91.0, 34.0).is_valid());
        assert!(!Location::from_lat_lng(32.0, f64::NAN).is_valid());
    }
}

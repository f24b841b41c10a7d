pub struct LatLng(pub f64, pub f64);

impl From<&LatLng> for geo_types::Point {
    fn from(value: &LatLng) -> Self {
        geo_types::Point::new(value.1, value.0)
    }
}

pub fn tel_aviv_points() -> Vec<LatLng> {
    vec![LatLng(32.0664, 34.7777), LatLng(32.0700, 34.7800)]
}

use geo::{Distance, Haversine};

use crate::{travel_time::TravelTime, travel_time_matrix::TravelTimeMatrix};

/// Travel times over the great-circle distance at a constant speed, rounded to whole seconds.
pub fn as_the_crow_flies_matrix<P>(points: &[P], speed_kmh: f64) -> TravelTimeMatrix
where
    for<'a> &'a P: Into<geo_types::Point>,
{
    let points: Vec<geo_types::Point> = points.iter().map(|p| p.into()).collect();
    let meters_per_second = speed_kmh / 3.6;

    TravelTimeMatrix::from_fn(points.len(), |from, to| {
        if from == to {
            return TravelTime::ZERO;
        }

        let (a, b) = (from.min(to), from.max(to));
        let haversine = Haversine;
        let meters = haversine.distance(points[a], points[b]);
        TravelTime::Reachable((meters / meters_per_second).round() as u64)
    })
}

use std::cell::Cell;

use shuttle_matrix_providers::{
    error::MatrixError, time_matrix_provider::TimeMatrixProvider, travel_time::TravelTime,
    travel_time_matrix::TravelTimeMatrix,
};
use shuttle_optimizer::{
    optimizer::OptimizeParams,
    problem::{location::Location, route_limits::RouteLimits, vehicle_type::VehicleType},
};

pub const DESTINATION: Location = Location::from_lat_lng(32.0853, 34.7818);

pub fn minivan_and_sedan_params() -> OptimizeParams {
    OptimizeParams {
        destination: DESTINATION,
        limits: RouteLimits::from_secs(900, 3600),
        vehicle_types: vec![VehicleType::new("Minivan", 14), VehicleType::new("Sedan", 4)],
    }
}

/// `count` pickups around `(lat, lng)`, a few hundred meters apart.
pub fn create_pickups(lat: f64, lng: f64, count: usize) -> Vec<Location> {
    (0..count)
        .map(|i| Location::from_lat_lng(lat + i as f64 * 0.0005, lng + i as f64 * 0.0005))
        .collect()
}

//
//  Pickup groups, each far from the others and from the destination:
//
//  group 0: north Tel Aviv  (32.11, 34.80)
//  group 1: Jaffa           (32.05, 34.75)
//  group 2: Ramat Gan       (32.08, 34.82)
//
pub const GROUP_CENTERS: [(f64, f64); 3] = [(32.11, 34.80), (32.05, 34.75), (32.08, 34.82)];

pub fn create_grouped_pickups(sizes: &[usize]) -> Vec<Location> {
    sizes
        .iter()
        .zip(GROUP_CENTERS)
        .flat_map(|(&size, (lat, lng))| create_pickups(lat, lng, size))
        .collect()
}

fn group_of(point: &geo::Point) -> Option<usize> {
    GROUP_CENTERS
        .iter()
        .position(|&(lat, lng)| (point.y() - lat).abs() < 0.02 && (point.x() - lng).abs() < 0.02)
}

/// Deterministic stand-in for a mapping service.
///
/// Points of the same group are `intra` seconds apart. Points of different
/// groups are 1000 to 2000 seconds apart. The destination, or any point outside
/// a group, is `to_destination` seconds from everything. Requests are counted.
pub struct GroupedProvider {
    pub intra: u64,
    pub to_destination: u64,
    requests: Cell<usize>,
}

impl GroupedProvider {
    pub fn new(intra: u64, to_destination: u64) -> Self {
        Self {
            intra,
            to_destination,
            requests: Cell::new(0),
        }
    }

    pub fn requests(&self) -> usize {
        self.requests.get()
    }

    fn travel_time(&self, from: &geo::Point, to: &geo::Point) -> TravelTime {
        match (group_of(from), group_of(to)) {
            (Some(a), Some(b)) if a == b => TravelTime::Reachable(self.intra),
            (Some(a), Some(b)) => TravelTime::Reachable(1000 + 500 * a.abs_diff(b) as u64),
            _ => TravelTime::Reachable(self.to_destination),
        }
    }
}

impl TimeMatrixProvider for GroupedProvider {
    async fn fetch_matrix<P>(&self, points: &[P]) -> Result<TravelTimeMatrix, MatrixError>
    where
        for<'a> &'a P: Into<geo::Point>,
    {
        self.requests.set(self.requests.get() + 1);

        let points: Vec<geo::Point> = points.iter().map(|p| p.into()).collect();

        Ok(TravelTimeMatrix::from_fn(points.len(), |from, to| {
            if from == to {
                TravelTime::ZERO
            } else {
                self.travel_time(&points[from], &points[to])
            }
        }))
    }
}

/// Like a constant provider, but one point has no known route to or from anything.
pub struct IsolatedPointProvider {
    pub seconds: u64,
    pub isolated: geo::Point,
}

impl TimeMatrixProvider for IsolatedPointProvider {
    async fn fetch_matrix<P>(&self, points: &[P]) -> Result<TravelTimeMatrix, MatrixError>
    where
        for<'a> &'a P: Into<geo::Point>,
    {
        let points: Vec<geo::Point> = points.iter().map(|p| p.into()).collect();

        Ok(TravelTimeMatrix::from_fn(points.len(), |from, to| {
            if from == to {
                TravelTime::ZERO
            } else if points[from] == self.isolated || points[to] == self.isolated {
                TravelTime::Unreachable
            } else {
                TravelTime::Reachable(self.seconds)
            }
        }))
    }
}

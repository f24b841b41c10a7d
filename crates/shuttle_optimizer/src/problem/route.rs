use std::fmt::Display;

use super::location::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteWarning {
    TotalTimeExceeded,
    LegTimeExceeded,
}

impl Display for RouteWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RouteWarning::TotalTimeExceeded => "Total route time exceeds max allowed time",
                RouteWarning::LegTimeExceeded => "A leg exceeds max time between stops",
            }
        )
    }
}

/// Stops of one vehicle in visiting order, the last stop being the destination.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    stops: Vec<Location>,
    total_travel_time: u64,
    max_leg_time: u64,
    warnings: Vec<RouteWarning>,
}

impl Route {
    pub fn new(
        stops: Vec<Location>,
        total_travel_time: u64,
        max_leg_time: u64,
        warnings: Vec<RouteWarning>,
    ) -> Self {
        Self {
            stops,
            total_travel_time,
            max_leg_time,
            warnings,
        }
    }

    pub fn stops(&self) -> &[Location] {
        &self.stops
    }

    /// Stops before the destination.
    pub fn passenger_stops(&self) -> &[Location] {
        match self.stops.split_last() {
            Some((_, passengers)) => passengers,
            None => &[],
        }
    }

    pub fn destination(&self) -> Option<&Location> {
        self.stops.last()
    }

    /// Seconds
    pub fn total_travel_time(&self) -> u64 {
        self.total_travel_time
    }

    /// Seconds
    pub fn max_leg_time(&self) -> u64 {
        self.max_leg_time
    }

    pub fn warnings(&self) -> &[RouteWarning] {
        &self.warnings
    }
}

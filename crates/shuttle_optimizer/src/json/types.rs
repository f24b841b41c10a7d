use serde::{Deserialize, Serialize};

use crate::{
    optimizer::{Solution, VehicleRoute},
    problem::location::Location,
};

/// Document written for a solved run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename = "Solution")]
pub struct JsonSolution {
    pub routes: Vec<JsonRoute>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename = "Route")]
pub struct JsonRoute {
    pub vehicle_type: String,
    /// `[lat, lng]` pairs, the last one is the destination
    pub stops: Vec<Location>,
    /// Seconds
    pub total_travel_time: u64,
    /// Seconds
    pub max_leg_time: u64,
    pub warnings: Vec<String>,
}

impl From<&VehicleRoute> for JsonRoute {
    fn from(vehicle_route: &VehicleRoute) -> Self {
        let route = vehicle_route.route();
        JsonRoute {
            vehicle_type: vehicle_route.vehicle_type().to_owned(),
            stops: route.stops().to_vec(),
            total_travel_time: route.total_travel_time(),
            max_leg_time: route.max_leg_time(),
            warnings: route
                .warnings()
                .iter()
                .map(|warning| warning.to_string())
                .collect(),
        }
    }
}

impl From<&Solution> for JsonSolution {
    fn from(solution: &Solution) -> Self {
        JsonSolution {
            routes: solution.routes().iter().map(JsonRoute::from).collect(),
        }
    }
}

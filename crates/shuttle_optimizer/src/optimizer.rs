use shuttle_matrix_providers::time_matrix_provider::TimeMatrixProvider;
use tracing::{Level, info, instrument, warn};

use crate::{
    assignment::vehicle_assignment::assign_passengers,
    clustering::cluster_passengers,
    error::OptimizeError,
    problem::{
        location::Location, route::Route, route_limits::RouteLimits, vehicle_type::VehicleType,
    },
    sequencing::sequence_route,
};

#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeParams {
    pub destination: Location,
    pub limits: RouteLimits,
    pub vehicle_types: Vec<VehicleType>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VehicleRoute {
    vehicle_type: String,
    route: Route,
}

impl VehicleRoute {
    pub fn new(vehicle_type: impl Into<String>, route: Route) -> Self {
        Self {
            vehicle_type: vehicle_type.into(),
            route,
        }
    }

    pub fn vehicle_type(&self) -> &str {
        &self.vehicle_type
    }

    pub fn route(&self) -> &Route {
        &self.route
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Solution {
    routes: Vec<VehicleRoute>,
}

impl Solution {
    pub fn new(routes: Vec<VehicleRoute>) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &[VehicleRoute] {
        &self.routes
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Passenger stops of every route, destinations excluded.
    pub fn passenger_stops(&self) -> impl Iterator<Item = &Location> {
        self.routes
            .iter()
            .flat_map(|vehicle_route| vehicle_route.route.passenger_stops())
    }
}

/// Runs the whole pipeline: clusters the pickups, packs them into vehicles and
/// sequences one route per vehicle.
///
/// Errors from clustering and assignment abort the run. A vehicle whose
/// passengers cannot be resolved is skipped with a warning, while a failing
/// time matrix request still aborts.
#[instrument(skip_all, level = Level::INFO, fields(pickups = pickups.len()))]
pub async fn optimize<P>(
    pickups: &[Location],
    params: &OptimizeParams,
    provider: &P,
) -> Result<Solution, OptimizeError>
where
    P: TimeMatrixProvider,
{
    if pickups.is_empty() {
        info!("No pickups to route");
        return Ok(Solution::default());
    }

    info!("Starting route optimization for {} pickups", pickups.len());

    let clusters =
        cluster_passengers(provider, pickups, params.limits.max_time_between_stops).await?;

    let (assignments, passengers) = assign_passengers(&clusters, &params.vehicle_types)?;

    let mut routes = Vec::with_capacity(assignments.len());
    for (vehicle_id, assignment) in assignments.iter().enumerate() {
        let vehicle_type = assignment.vehicle_type().label();

        let Some(vehicle_passengers) = assignment.resolve(&passengers) else {
            warn!(
                vehicle_id,
                vehicle_type, "Skipping vehicle, its passengers could not be resolved"
            );
            continue;
        };

        match sequence_route(
            provider,
            &vehicle_passengers,
            params.destination,
            &params.limits,
        )
        .await?
        {
            Some(route) => routes.push(VehicleRoute::new(vehicle_type, route)),
            None => warn!(vehicle_id, vehicle_type, "Skipping vehicle without passengers"),
        }
    }

    info!("Route optimization completed with {} routes", routes.len());

    Ok(Solution::new(routes))
}

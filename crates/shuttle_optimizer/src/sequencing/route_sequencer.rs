use shuttle_matrix_providers::{
    time_matrix_provider::{TimeMatrixProvider, ensure_dimension},
    travel_time::UNREACHABLE_SECONDS,
};
use tracing::{Level, debug, instrument, warn};

use crate::{
    error::OptimizeError,
    problem::{
        location::Location,
        route::{Route, RouteWarning},
        route_limits::RouteLimits,
    },
};

use super::nearest_neighbor::{leg_metrics, move_to_end, nearest_neighbor_tour};

/// Orders the passengers of one vehicle, ending at `destination`.
///
/// The tour starts at the first passenger and greedily visits the closest
/// remaining stop. The destination is then moved to the end if the walk
/// reached it early. Exceeded limits are reported as warnings on the route.
///
/// Returns `None` without fetching anything when there are no passengers.
#[instrument(skip_all, level = Level::DEBUG, fields(passengers = passengers.len()))]
pub async fn sequence_route<P>(
    provider: &P,
    passengers: &[Location],
    destination: Location,
    limits: &RouteLimits,
) -> Result<Option<Route>, OptimizeError>
where
    P: TimeMatrixProvider,
{
    if passengers.is_empty() {
        return Ok(None);
    }

    let mut points = Vec::with_capacity(passengers.len() + 1);
    points.extend_from_slice(passengers);
    points.push(destination);
    let destination_index = passengers.len();

    let matrix = provider.fetch_matrix(&points).await?;
    ensure_dimension(&matrix, points.len())?;

    let mut tour = nearest_neighbor_tour(&matrix, 0);
    if tour.last() != Some(&destination_index) {
        debug!("Destination visited early, moving it to the end of the route");
        move_to_end(&mut tour, destination_index);
    }

    let metrics = leg_metrics(&matrix, &tour);

    let mut warnings = vec![];
    if limits.total_exceeds(metrics.total_travel_time) {
        warnings.push(RouteWarning::TotalTimeExceeded);
    }
    if limits.leg_exceeds(metrics.max_leg_time) {
        warnings.push(RouteWarning::LegTimeExceeded);
    }

    if metrics.has_unreachable_leg {
        warn!(
            "Route crosses a leg with no known route, counted as {}s",
            UNREACHABLE_SECONDS
        );
    }

    for warning in &warnings {
        warn!(
            total_travel_time = metrics.total_travel_time,
            max_leg_time = metrics.max_leg_time,
            "{}",
            warning
        );
    }

    let stops = tour.into_iter().map(|index| points[index]).collect();

    Ok(Some(Route::new(
        stops,
        metrics.total_travel_time,
        metrics.max_leg_time,
        warnings,
    )))
}

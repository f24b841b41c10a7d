use jiff::SignedDuration;
use shuttle_matrix_providers::time_matrix_provider::{TimeMatrixProvider, ensure_dimension};
use tracing::{Level, info, instrument};

use crate::{
    error::OptimizeError,
    problem::{cluster::Cluster, location::Location},
};

use super::complete_linkage::{complete_linkage, symmetrize};

/// Clusters pickups so that no cluster requires a leg longer than `max_time_between_stops`.
#[instrument(skip_all, level = Level::DEBUG, fields(pickups = pickups.len()))]
pub async fn cluster_passengers<P>(
    provider: &P,
    pickups: &[Location],
    max_time_between_stops: SignedDuration,
) -> Result<Vec<Cluster>, OptimizeError>
where
    P: TimeMatrixProvider,
{
    match pickups {
        [] => {
            info!("No pickups to cluster");
            return Ok(vec![]);
        }
        [single] => return Ok(vec![Cluster::new(vec![*single])]),
        _ => {}
    }

    info!(
        "Clustering passengers based on max time between stops ({})",
        max_time_between_stops
    );

    let matrix = provider.fetch_matrix(pickups).await?;
    ensure_dimension(&matrix, pickups.len())?;

    let groups = complete_linkage(&symmetrize(&matrix), max_time_between_stops.as_secs_f64());

    let clusters: Vec<Cluster> = groups
        .into_iter()
        .map(|members| Cluster::new(members.into_iter().map(|i| pickups[i]).collect()))
        .collect();

    info!(
        "Formed {} clusters from {} passengers",
        clusters.len(),
        pickups.len()
    );

    Ok(clusters)
}

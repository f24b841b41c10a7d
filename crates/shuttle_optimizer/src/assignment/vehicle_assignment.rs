use tracing::{error, info, warn};

use crate::{
    define_index_newtype,
    error::OptimizeError,
    problem::{cluster::Cluster, location::Location, vehicle_type::VehicleType},
};

define_index_newtype!(PassengerIdx, Location);

/// One vehicle instance and the passengers it carries, as indices into the flattened passenger list.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleAssignment {
    vehicle_type: VehicleType,
    passengers: Vec<PassengerIdx>,
}

impl VehicleAssignment {
    pub fn new(vehicle_type: VehicleType, passengers: Vec<PassengerIdx>) -> Self {
        Self {
            vehicle_type,
            passengers,
        }
    }

    pub fn vehicle_type(&self) -> &VehicleType {
        &self.vehicle_type
    }

    pub fn passengers(&self) -> &[PassengerIdx] {
        &self.passengers
    }

    /// `None` if any index falls outside `passengers`.
    pub fn resolve(&self, passengers: &[Location]) -> Option<Vec<Location>> {
        self.passengers
            .iter()
            .map(|idx| idx.resolve(passengers).copied())
            .collect()
    }
}

/// Flattens the clusters and fills vehicles from the largest type to the smallest,
/// cycling through the types until every passenger is seated.
///
/// Returns the assignments with the flattened passenger list they index into.
pub fn assign_passengers(
    clusters: &[Cluster],
    vehicle_types: &[VehicleType],
) -> Result<(Vec<VehicleAssignment>, Vec<Location>), OptimizeError> {
    info!("Assigning passengers to vehicles");

    let passengers: Vec<Location> = clusters
        .iter()
        .flat_map(|cluster| cluster.locations().iter().copied())
        .collect();

    if passengers.is_empty() {
        warn!("No passengers available for assignment");
        return Ok((vec![], vec![]));
    }

    // Stable, types with the same seats keep their configured order
    let mut sorted_types: Vec<&VehicleType> = vehicle_types.iter().collect();
    sorted_types.sort_by(|a, b| b.seats().cmp(&a.seats()));

    let mut assignments = vec![];
    let mut next = 0;

    while next < passengers.len() {
        let assigned_before = next;

        for vehicle_type in &sorted_types {
            let remaining = passengers.len() - next;
            if remaining == 0 {
                break;
            }

            let count = vehicle_type.capacity().min(remaining);
            if count == 0 {
                continue;
            }

            assignments.push(VehicleAssignment::new(
                (*vehicle_type).clone(),
                (next..next + count).map(PassengerIdx::new).collect(),
            ));
            next += count;
        }

        if next == assigned_before {
            error!("Unable to assign all passengers to vehicles with given capacities");
            return Err(OptimizeError::Configuration(format!(
                "vehicle capacity assignment failed, {} passengers left without a seat",
                passengers.len() - next
            )));
        }
    }

    info!(
        "Assigned {} passengers to {} vehicles",
        passengers.len(),
        assignments.len()
    );

    Ok((assignments, passengers))
}

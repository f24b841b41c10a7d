use fixedbitset::FixedBitSet;
use shuttle_matrix_providers::travel_time_matrix::TravelTimeMatrix;

/// Greedy tour over every point of `matrix`, starting at `start` and always moving
/// to the closest unvisited point. Ties go to the lowest index.
pub fn nearest_neighbor_tour(matrix: &TravelTimeMatrix, start: usize) -> Vec<usize> {
    let n = matrix.num_points();
    if start >= n {
        return vec![];
    }

    let mut visited = FixedBitSet::with_capacity(n);
    let mut tour = Vec::with_capacity(n);

    visited.insert(start);
    tour.push(start);

    let mut current = start;
    while tour.len() < n {
        let mut next: Option<(usize, u64)> = None;
        for candidate in visited.zeroes() {
            let seconds = matrix.seconds(current, candidate);
            if next.is_none_or(|(_, best)| seconds < best) {
                next = Some((candidate, seconds));
            }
        }

        let Some((next, _)) = next else {
            break;
        };

        visited.insert(next);
        tour.push(next);
        current = next;
    }

    tour
}

/// Moves `point` to the end of the tour if it is anywhere else.
pub fn move_to_end(tour: &mut Vec<usize>, point: usize) {
    if tour.last() == Some(&point) {
        return;
    }

    if let Some(position) = tour.iter().position(|&p| p == point) {
        tour.remove(position);
        tour.push(point);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LegMetrics {
    pub total_travel_time: u64,
    pub max_leg_time: u64,
    pub has_unreachable_leg: bool,
}

pub fn leg_metrics(matrix: &TravelTimeMatrix, tour: &[usize]) -> LegMetrics {
    tour.windows(2)
        .fold(LegMetrics::default(), |metrics, leg| {
            let time = matrix.travel_time(leg[0], leg[1]);
            LegMetrics {
                total_travel_time: metrics.total_travel_time.saturating_add(time.seconds()),
                max_leg_time: metrics.max_leg_time.max(time.seconds()),
                has_unreachable_leg: metrics.has_unreachable_leg || !time.is_reachable(),
            }
        })
}

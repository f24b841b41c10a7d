use jiff::SignedDuration;

/// Budgets a route is checked against. Exceeding them only produces warnings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteLimits {
    pub max_time_between_stops: SignedDuration,
    pub max_total_route_time: SignedDuration,
}

impl RouteLimits {
    pub fn from_secs(max_time_between_stops: i64, max_total_route_time: i64) -> Self {
        Self {
            max_time_between_stops: SignedDuration::from_secs(max_time_between_stops),
            max_total_route_time: SignedDuration::from_secs(max_total_route_time),
        }
    }

    pub fn leg_exceeds(&self, seconds: u64) -> bool {
        exceeds(seconds, self.max_time_between_stops)
    }

    pub fn total_exceeds(&self, seconds: u64) -> bool {
        exceeds(seconds, self.max_total_route_time)
    }
}

fn exceeds(seconds: u64, limit: SignedDuration) -> bool {
    i64::try_from(seconds).map_or(true, |seconds| SignedDuration::from_secs(seconds) > limit)
}

use super::location::Location;

/// Pickups close enough to each other to ride together.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cluster {
    locations: Vec<Location>,
}

impl Cluster {
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }
}

use serde::{Deserialize, Serialize};

/// A kind of vehicle available in unlimited number.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VehicleType {
    #[serde(rename = "type")]
    label: String,
    seats: i64,
}

impl VehicleType {
    pub fn new(label: impl Into<String>, seats: i64) -> Self {
        Self {
            label: label.into(),
            seats,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Seats as configured, may be zero or negative when misconfigured.
    pub fn seats(&self) -> i64 {
        self.seats
    }

    /// Number of passengers one vehicle can carry.
    pub fn capacity(&self) -> usize {
        usize::try_from(self.seats).unwrap_or(0)
    }
}

use serde::{Deserialize, Serialize};

use crate::{google_api::TravelMode, travel_time_matrix::TravelTimeMatrix};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum TravelMatrixProvider {
    /// https://developers.google.com/maps/documentation/distance-matrix
    GoogleDistanceMatrix {
        #[serde(default)]
        mode: TravelMode,
    },
    AsTheCrowFlies {
        speed_kmh: f64,
    },
    Custom {
        matrix: TravelTimeMatrix,
    },
}

impl Default for TravelMatrixProvider {
    fn default() -> Self {
        TravelMatrixProvider::GoogleDistanceMatrix {
            mode: TravelMode::Driving,
        }
    }
}

impl TravelMatrixProvider {
    pub fn requires_api_key(&self) -> bool {
        matches!(self, TravelMatrixProvider::GoogleDistanceMatrix { .. })
    }
}

impl std::hash::Hash for TravelMatrixProvider {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self {
            TravelMatrixProvider::GoogleDistanceMatrix { mode } => {
                state.write_u8(0);
                mode.hash(state);
            }
            TravelMatrixProvider::AsTheCrowFlies { speed_kmh } => {
                state.write_u8(1);
                state.write_u64(speed_kmh.to_bits());
            }
            TravelMatrixProvider::Custom { matrix } => {
                state.write_u8(2);
                matrix.hash(state);
            }
        }
    }
}

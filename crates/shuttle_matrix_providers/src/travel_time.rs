use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Seconds charged for a leg the provider reported as unreachable.
pub const UNREACHABLE_SECONDS: u64 = 999_999;

/// A single matrix cell. Serialized as a number of seconds, or `null` when unreachable.
#[derive(Deserialize, Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(from = "Option<u64>", into = "Option<u64>")]
pub enum TravelTime {
    Reachable(u64),
    Unreachable,
}

impl TravelTime {
    pub const ZERO: TravelTime = TravelTime::Reachable(0);

    /// Travel time in seconds, unreachable pairs count as [`UNREACHABLE_SECONDS`].
    #[inline(always)]
    pub fn seconds(&self) -> u64 {
        match self {
            TravelTime::Reachable(seconds) => *seconds,
            TravelTime::Unreachable => UNREACHABLE_SECONDS,
        }
    }

    #[inline(always)]
    pub fn is_reachable(&self) -> bool {
        matches!(self, TravelTime::Reachable(_))
    }
}

impl From<Option<u64>> for TravelTime {
    fn from(value: Option<u64>) -> Self {
        match value {
            Some(seconds) => TravelTime::Reachable(seconds),
            None => TravelTime::Unreachable,
        }
    }
}

impl From<TravelTime> for Option<u64> {
    fn from(value: TravelTime) -> Self {
        match value {
            TravelTime::Reachable(seconds) => Some(seconds),
            TravelTime::Unreachable => None,
        }
    }
}

impl Display for TravelTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TravelTime::Reachable(seconds) => write!(f, "{seconds}s"),
            TravelTime::Unreachable => write!(f, "unreachable"),
        }
    }
}

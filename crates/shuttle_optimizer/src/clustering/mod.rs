mod cluster_passengers;
pub mod complete_linkage;

pub use cluster_passengers::cluster_passengers;

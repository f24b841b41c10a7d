pub mod nearest_neighbor;
mod route_sequencer;

pub use route_sequencer::sequence_route;

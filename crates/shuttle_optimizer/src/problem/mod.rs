pub mod cluster;
pub mod location;
pub mod route;
pub mod route_limits;
pub mod vehicle_type;

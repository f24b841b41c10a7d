pub mod vehicle_assignment;

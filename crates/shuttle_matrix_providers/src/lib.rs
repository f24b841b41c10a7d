pub mod as_the_crow_flies;
pub mod cache;
pub mod error;
pub mod google_api;
pub mod time_matrix_provider;
pub mod travel_matrix_client;
pub mod travel_matrix_provider;
pub mod travel_time;
pub mod travel_time_matrix;

#[cfg(test)]
pub(crate) mod test_utils;

pub mod assignment;
pub mod clustering;
pub mod config;
pub mod error;
pub mod json;
pub mod optimizer;
pub mod parsers;
pub mod problem;
pub mod sequencing;
mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

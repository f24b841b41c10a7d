use shuttle_matrix_providers::error::MatrixError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Time matrix service failed: {0}")]
    Service(#[from] MatrixError),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Input does not contain required fields or is empty")]
    EmptyInput,

    #[error("Input does not contain required column `{0}`")]
    MissingColumn(&'static str),

    #[error("Invalid value `{value}` for `{column}` on line {line}")]
    InvalidValue {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("Failed to read input: {0}")]
    Csv(#[from] csv::Error),

    #[error("Google API key missing in .env ({env_var}) or config")]
    MissingApiKey { env_var: &'static str },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

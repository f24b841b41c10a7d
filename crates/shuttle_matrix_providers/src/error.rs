use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error: {status} - {message}")]
    Http { status: u16, message: String },

    #[error("API error: {status} - {message}")]
    Api { status: String, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Time matrix dimensions mismatch: expected {expected} rows, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Time matrix row {row} has {actual} columns, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Missing API key for {0}")]
    MissingApiKey(&'static str),

    #[error("Invalid provider: {0}")]
    InvalidProvider(String),

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
}

use thiserror::Error;

/// Errors raised while talking to the player API or loading configuration
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for player operations
pub type Result<T> = std::result::Result<T, RequestError>;

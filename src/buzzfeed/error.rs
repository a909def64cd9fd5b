use thiserror::Error;

/// Failures surfaced by the Buzzfeed client. Nothing is caught or retried
/// internally; every failure propagates to the caller as-is.
#[derive(Debug, Error)]
pub enum BuzzError {
    /// A parameter was rejected before any request went out
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A timestamp did not match the `YYYY-MM-DD HH:MM:SS` format
    #[error("bad timestamp: {0}")]
    Format(#[from] chrono::ParseError),

    /// The transport failed before a response body could be read
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not JSON of the expected shape
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

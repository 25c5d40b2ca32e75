use thiserror::Error;

/// Result type for candle retrieval
pub type FetchResult<T> = Result<T, FetchError>;

/// Failures while retrieving candles. None of them are retried.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FetchError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP status code {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode klines response: {0}")]
    Decode(String),
}

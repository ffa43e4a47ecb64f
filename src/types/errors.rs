//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation and provide
//! clear error messages with context.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the fulfillment endpoint.
#[derive(Error, Debug)]
pub enum Error {
    /// Request body is not valid JSON or is missing required structure.
    /// Reported to callers inside a `notification:error` envelope.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Invalid configuration (fatal at startup).
    #[error("config error: {0}")]
    Config(String),

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Listen address could not be parsed.
    #[error("invalid address: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    /// I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// Convenience constructors
impl Error {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

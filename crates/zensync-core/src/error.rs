//! Error types for zensync-core

use thiserror::Error;

/// Result type alias using zensync-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in zensync-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport or response decoding error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the diff endpoint
    #[error("ZenMoney API error {status}: {body}")]
    Api { status: u16, body: String },

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

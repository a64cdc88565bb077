//! Common error types for the Scrumless backend

use thiserror::Error;

/// Common result type for Scrumless operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the Scrumless services
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network-level failure reaching the Record Store (includes timeouts)
    #[error("Network error: {0}")]
    Network(String),

    /// The Record Store rejected the request
    #[error("Record store error {0}: {1}")]
    StoreRejected(u16, String),

    /// Record Store response could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),
}

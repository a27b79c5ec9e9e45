//! Error handling for the schlex driver.
//!
//! Scan errors from `schlex-lex` are wrapped rather than flattened so callers
//! can still ask for their category and span.

use thiserror::Error;

use schlex_lex::ScanError;

/// Main error type for the driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The scanner stopped on malformed input or a failed read.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// The configuration file was missing, malformed or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Writing tokens to the output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A token could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;

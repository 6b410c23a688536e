//! Error types for linen-result

use std::io;
use thiserror::Error;

/// Result type alias for linen-result operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for linen-result
#[derive(Error, Debug)]
pub enum Error {
    /// The host engine called the collector outside its contract,
    /// e.g. recording an outcome after finalization or finalizing twice.
    #[error("Protocol violation: {0}")]
    ProtocolViolation(String),

    /// Configuration file error or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation on an output stream failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON encoding of the final report failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML encoding of a report block failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

//! Error types for HealthMate
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for HealthMate operations
///
/// This enum encompasses all possible errors that can occur during
/// configuration loading, backend requests, local storage access,
/// and telephony dispatch. Note that most user-facing paths recover
/// from these locally (canned messages, empty defaults) rather than
/// propagating them to the top level.
#[derive(Error, Debug)]
pub enum HealthMateError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Backend-related errors (chat or triage service)
    #[error("Backend error: {0}")]
    Backend(String),

    /// Local key-value store errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Telephony dispatch errors (tel: URL could not be opened)
    #[error("Dial error: {0}")]
    Dial(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for HealthMate operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;

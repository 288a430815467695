//! Client configuration error types.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors raised while setting or loading client configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A setter rejected a value.
    #[error("Invalid configuration value: {field} - {reason}")]
    InvalidValue { field: String, reason: String },

    /// A transport name was not recognised.
    #[error("Unknown transport: {value} (expected 'grpc' or 'rest')")]
    UnknownTransport { value: String },

    /// Configuration text could not be parsed.
    #[error("Failed to parse configuration: {reason}")]
    Parse { reason: String },

    /// A configuration file could not be read.
    #[error("Failed to read configuration file: {path} - {reason}")]
    Io { path: String, reason: String },
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Outbox poll interval must be at least 10ms")]
    InvalidPollInterval,

    #[error("Outbox batch size must be between 1 and 1000")]
    InvalidBatchSize,

    #[error("Persistence timeout must be between 1 and 60 seconds")]
    InvalidTimeout,

    #[error("Processed-event retention must be at least 1 hour")]
    InvalidRetention,
}

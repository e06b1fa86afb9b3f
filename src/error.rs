//! Error types for the logger crate.
//!
//! Provisioning itself never fails. Errors only arise when turning
//! user-supplied text (level names, config files) into typed values.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the public API.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// A severity name or number that does not map to a level.
    #[error("unknown severity level: {0:?}")]
    UnknownLevel(String),

    /// Configuration could not be loaded or failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for logger operations.
pub type LoggerResult<T> = Result<T, LoggerError>;

//! Severity levels.
//!
//! # Ordering
//! ```text
//! DEBUG (10) < INFO (20) < WARNING (30) < ERROR (40) < CRITICAL (50)
//! ```
//!
//! The numeric values are stable and are what handles and sinks store in
//! their atomic thresholds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LoggerError;

/// Minimum severity a message must carry to be emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    /// Diagnostic detail.
    Debug,
    /// Normal operation.
    #[default]
    Info,
    /// Something unexpected but recoverable.
    #[serde(alias = "warn")]
    Warning,
    /// An operation failed.
    Error,
    /// The process cannot continue normally.
    #[serde(alias = "fatal")]
    Critical,
}

impl SeverityLevel {
    /// Every level, lowest first.
    pub const ALL: [SeverityLevel; 5] = [
        SeverityLevel::Debug,
        SeverityLevel::Info,
        SeverityLevel::Warning,
        SeverityLevel::Error,
        SeverityLevel::Critical,
    ];

    /// Upper-case name used in formatted output.
    pub fn name(self) -> &'static str {
        match self {
            SeverityLevel::Debug => "DEBUG",
            SeverityLevel::Info => "INFO",
            SeverityLevel::Warning => "WARNING",
            SeverityLevel::Error => "ERROR",
            SeverityLevel::Critical => "CRITICAL",
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            SeverityLevel::Debug => 10,
            SeverityLevel::Info => 20,
            SeverityLevel::Warning => 30,
            SeverityLevel::Error => 40,
            SeverityLevel::Critical => 50,
        }
    }

    /// Inverse of [`as_u8`](Self::as_u8). Only the exact level values map.
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_u8() == value)
    }

    /// Closest `tracing` level. `Critical` collapses onto `ERROR`.
    pub fn to_tracing_level(self) -> tracing::Level {
        match self {
            SeverityLevel::Debug => tracing::Level::DEBUG,
            SeverityLevel::Info => tracing::Level::INFO,
            SeverityLevel::Warning => tracing::Level::WARN,
            SeverityLevel::Error | SeverityLevel::Critical => tracing::Level::ERROR,
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SeverityLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<u8>() {
            return Self::from_u8(value).ok_or_else(|| LoggerError::UnknownLevel(s.to_string()));
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "debug" => Ok(SeverityLevel::Debug),
            "info" => Ok(SeverityLevel::Info),
            "warning" | "warn" => Ok(SeverityLevel::Warning),
            "error" => Ok(SeverityLevel::Error),
            "critical" | "fatal" => Ok(SeverityLevel::Critical),
            _ => Err(LoggerError::UnknownLevel(s.to_string())),
        }
    }
}

impl From<tracing::Level> for SeverityLevel {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE | tracing::Level::DEBUG => SeverityLevel::Debug,
            tracing::Level::INFO => SeverityLevel::Info,
            tracing::Level::WARN => SeverityLevel::Warning,
            tracing::Level::ERROR => SeverityLevel::Error,
        }
    }
}

//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::LoggerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

impl LoggerConfig {
    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: LoggerConfig = toml::from_str(content)?;
        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

/// Load, apply environment overrides to, and validate a config file.
pub fn load_config(path: &Path) -> Result<LoggerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: LoggerConfig = toml::from_str(&content)?;
    let config = config.with_env_overrides();

    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::debug!(path = ?path, name = %config.name, level = %config.level, "Configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::SeverityLevel;
    use std::io::Write;

    #[test]
    fn test_from_toml_str() {
        let config = LoggerConfig::from_toml_str("name = \"agent\"\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.name, "agent");
        assert_eq!(config.level, SeverityLevel::Debug);
    }

    #[test]
    fn test_unknown_level_is_parse_error() {
        let err = LoggerConfig::from_toml_str("level = \"loud\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error_display() {
        let err = LoggerConfig::from_toml_str("name = \"\"").unwrap_err();
        assert_eq!(err.to_string(), "validation failed: logger name must not be empty");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = \"file-logger\"").unwrap();
        writeln!(file, "level = \"error\"").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.name, "file-logger");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/axonops-logger.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}

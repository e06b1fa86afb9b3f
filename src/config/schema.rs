//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::handle::LoggerHandle;
use crate::level::SeverityLevel;
use crate::registry::{LoggerRegistry, DEFAULT_LEVEL, DEFAULT_LOGGER_NAME};

/// Environment variable that overrides the configured level.
pub const LEVEL_ENV_VAR: &str = "AXONOPS_LOG_LEVEL";

/// Which logger to provision and at what threshold.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Registry key of the logger.
    pub name: String,

    /// Minimum severity (debug, info, warning, error, critical).
    pub level: SeverityLevel,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_LOGGER_NAME.to_string(),
            level: DEFAULT_LEVEL,
        }
    }
}

impl LoggerConfig {
    /// Apply [`LEVEL_ENV_VAR`] if it is set to a known level.
    ///
    /// Unparseable values are ignored with a warning.
    pub fn with_env_overrides(self) -> Self {
        self.with_level_override(std::env::var(LEVEL_ENV_VAR).ok().as_deref())
    }

    fn with_level_override(mut self, raw: Option<&str>) -> Self {
        if let Some(raw) = raw {
            match raw.parse() {
                Ok(level) => self.level = level,
                Err(e) => tracing::warn!(var = LEVEL_ENV_VAR, value = raw, "Ignoring override: {}", e),
            }
        }
        self
    }

    /// Provision the configured logger in `registry`.
    pub fn provision(&self, registry: &LoggerRegistry) -> LoggerHandle {
        registry.provision(&self.name, self.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.name, "AxonOpsLogger");
        assert_eq!(config.level, SeverityLevel::Info);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: LoggerConfig = toml::from_str("").unwrap();
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config: LoggerConfig = toml::from_str("level = \"warn\"").unwrap();
        assert_eq!(config.name, "AxonOpsLogger");
        assert_eq!(config.level, SeverityLevel::Warning);
    }

    #[test]
    fn test_level_override() {
        let config = LoggerConfig::default().with_level_override(Some("error"));
        assert_eq!(config.level, SeverityLevel::Error);

        let config = LoggerConfig::default().with_level_override(Some("nonsense"));
        assert_eq!(config.level, SeverityLevel::Info);

        let config = LoggerConfig::default().with_level_override(None);
        assert_eq!(config.level, SeverityLevel::Info);
    }

    #[test]
    fn test_provision_into_registry() {
        let registry = LoggerRegistry::new();
        let config = LoggerConfig {
            name: "from-config".into(),
            level: SeverityLevel::Debug,
        };
        let handle = config.provision(&registry);
        assert_eq!(handle.name(), "from-config");
        assert_eq!(handle.level(), SeverityLevel::Debug);
        assert_eq!(handle.sink_count(), 1);
    }
}

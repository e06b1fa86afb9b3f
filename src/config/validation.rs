//! Configuration validation.
//!
//! # Responsibilities
//! - Reject names that cannot serve as a registry key or as a line field
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: `&LoggerConfig → Result<(), Vec<ValidationError>>`

use thiserror::Error;

use crate::config::schema::LoggerConfig;

/// A single semantic problem with a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("logger name must not be empty")]
    EmptyName,

    #[error("logger name {0:?} contains control characters")]
    ControlCharacters(String),

    #[error("logger name {0:?} has leading or trailing whitespace")]
    SurroundingWhitespace(String),
}

/// Check a parsed config.
pub fn validate_config(config: &LoggerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let name = config.name.as_str();

    if name.is_empty() {
        errors.push(ValidationError::EmptyName);
    }
    if name.chars().any(char::is_control) {
        errors.push(ValidationError::ControlCharacters(name.to_string()));
    }
    if !name.is_empty() && name.trim() != name {
        errors.push(ValidationError::SurroundingWhitespace(name.to_string()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> LoggerConfig {
        LoggerConfig {
            name: name.to_string(),
            ..LoggerConfig::default()
        }
    }

    #[test]
    fn test_default_is_valid() {
        assert!(validate_config(&LoggerConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(validate_config(&named("")), Err(vec![ValidationError::EmptyName]));
    }

    #[test]
    fn test_collects_every_error() {
        let errors = validate_config(&named(" bad\nname")).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], ValidationError::ControlCharacters(_)));
        assert!(matches!(errors[1], ValidationError::SurroundingWhitespace(_)));
    }

    #[test]
    fn test_dotted_names_are_fine() {
        assert!(validate_config(&named("axonops.agent.disk")).is_ok());
    }
}

//! Configuration for provisioning a logger from a file.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → schema.rs (LoggerConfig, serde defaults)
//!     → environment overrides (AXONOPS_LOG_LEVEL)
//!     → validation.rs (semantic checks)
//!     → LoggerConfig::provision(&registry)
//! ```
//!
//! # Design Decisions
//! - Every field has a default, so an empty file is a valid config
//! - Validation separates syntactic (serde) from semantic checks
//! - Loaded once; there is no reload path

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{LoggerConfig, LEVEL_ENV_VAR};
pub use validation::{validate_config, ValidationError};

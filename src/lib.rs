//! Named console loggers with a fixed line format.
//!
//! `provision(name, level)` retrieves or creates the logger called `name`,
//! sets its threshold, and attaches a single stdout sink the first time.
//! Every line looks like:
//!
//! ```text
//! <timestamp> - <name> - <SEVERITY> - <function> - <message>
//! ```

mod macros;

pub mod bridge;
pub mod config;
pub mod error;
pub mod format;
pub mod handle;
pub mod level;
pub mod registry;
pub mod sink;

pub use bridge::HandleLayer;
pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use handle::LoggerHandle;
pub use level::SeverityLevel;
pub use registry::{provision, provision_default, LoggerRegistry, DEFAULT_LEVEL, DEFAULT_LOGGER_NAME};
pub use sink::{Sink, StreamSink};

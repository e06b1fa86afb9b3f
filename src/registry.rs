//! Logger registry and provisioning.
//!
//! # Data Flow
//! ```text
//! provision(name, level)
//!     → entry(name)              (DashMap entry, held for the steps below)
//!     → handle.attach_if_empty(stdout sink)
//!     → handle.set_level(level)  (last call wins)
//!     → handle.set_sink_thresholds(level)
//!     → LoggerHandle
//! ```
//!
//! # Design Decisions
//! - A process-wide registry is available through [`LoggerRegistry::global`],
//!   but every operation also works on an explicit instance so tests and
//!   embedders can keep their own
//! - Re-provisioning re-thresholds the existing sinks too, so the effective
//!   threshold always follows the most recent call

use std::sync::{Arc, OnceLock};

use dashmap::DashMap;

use crate::handle::LoggerHandle;
use crate::level::SeverityLevel;
use crate::sink::{Sink, StreamSink};

/// Name used when callers do not pick one.
pub const DEFAULT_LOGGER_NAME: &str = "AxonOpsLogger";

/// Threshold used when callers do not pick one.
pub const DEFAULT_LEVEL: SeverityLevel = SeverityLevel::Info;

static GLOBAL: OnceLock<LoggerRegistry> = OnceLock::new();

/// Name-keyed collection of logger handles.
#[derive(Debug, Default)]
pub struct LoggerRegistry {
    loggers: DashMap<String, LoggerHandle>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry shared by the whole process.
    pub fn global() -> &'static LoggerRegistry {
        GLOBAL.get_or_init(LoggerRegistry::new)
    }

    /// Retrieve-or-create and configure the logger called `name`, attaching a
    /// stdout sink if it has none.
    pub fn provision(&self, name: &str, level: SeverityLevel) -> LoggerHandle {
        self.provision_with(name, level, || Arc::new(StreamSink::stdout(level)))
    }

    /// Same as [`provision`](Self::provision) with a caller-supplied sink.
    ///
    /// `make_sink` only runs when the logger has no sink yet. It runs while
    /// the name's registry entry is locked, so it must not provision the
    /// same registry.
    pub fn provision_with<F>(&self, name: &str, level: SeverityLevel, make_sink: F) -> LoggerHandle
    where
        F: FnOnce() -> Arc<dyn Sink>,
    {
        let mut created = false;
        let (handle, attached) = {
            // The entry guard serializes configuration per name: attach and
            // re-threshold happen as one step, so the handle and its sinks
            // always end at the same level.
            let entry = self.loggers.entry(name.to_string()).or_insert_with(|| {
                created = true;
                LoggerHandle::new(name, level)
            });
            let handle = entry.value().clone();
            let attached = handle.attach_if_empty(make_sink);
            handle.set_level(level);
            handle.set_sink_thresholds(level);
            (handle, attached)
        };

        // Guard released above; safe to emit.
        if created {
            tracing::debug!(name, "Created logger");
        }
        if attached {
            tracing::debug!(name, level = %level, "Attached console sink");
        } else {
            tracing::trace!(name, level = %level, sinks = handle.sink_count(), "Reusing existing sinks");
        }
        handle
    }

    /// Look up a logger without creating it.
    pub fn get(&self, name: &str) -> Option<LoggerHandle> {
        self.loggers.get(name).map(|entry| entry.value().clone())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loggers.contains_key(name)
    }

    /// Names of every logger created so far, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.iter().map(|entry| entry.key().clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }
}

/// Provision `name` at `level` in the process-wide registry.
pub fn provision(name: &str, level: SeverityLevel) -> LoggerHandle {
    LoggerRegistry::global().provision(name, level)
}

/// Provision [`DEFAULT_LOGGER_NAME`] at [`DEFAULT_LEVEL`].
pub fn provision_default() -> LoggerHandle {
    provision(DEFAULT_LOGGER_NAME, DEFAULT_LEVEL)
}

//! Named logger handles.
//!
//! # Responsibilities
//! - Hold the logger name and its threshold
//! - Fan records out to the attached sinks
//! - Attach the first sink at most once, even under concurrent callers
//!
//! # Design Decisions
//! - The sink list lives in an `ArcSwap`, so emitting never takes a lock on it
//! - Attachment is a compare-and-swap from an empty list; no removal exists,
//!   so a failed swap always means another caller attached first
//! - Thresholds are atomics; the last store wins

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::format::Record;
use crate::level::SeverityLevel;
use crate::sink::Sink;

type SinkList = Vec<Arc<dyn Sink>>;

/// Cheap, cloneable reference to a named logger.
///
/// Clones share state: a threshold change through one clone is visible
/// through every other.
#[derive(Clone)]
pub struct LoggerHandle {
    inner: Arc<Inner>,
}

struct Inner {
    name: String,
    threshold: AtomicU8,
    sinks: ArcSwap<SinkList>,
}

impl LoggerHandle {
    /// Create an unconfigured handle with no sinks.
    pub fn new(name: impl Into<String>, level: SeverityLevel) -> Self {
        Self {
            inner: Arc::new(Inner {
                name: name.into(),
                threshold: AtomicU8::new(level.as_u8()),
                sinks: ArcSwap::from_pointee(Vec::new()),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Current minimum severity.
    pub fn level(&self) -> SeverityLevel {
        SeverityLevel::from_u8(self.inner.threshold.load(Ordering::Relaxed)).unwrap_or_default()
    }

    pub fn set_level(&self, level: SeverityLevel) {
        self.inner.threshold.store(level.as_u8(), Ordering::Relaxed);
    }

    /// Whether a message at `level` passes the handle's own threshold.
    pub fn is_enabled_for(&self, level: SeverityLevel) -> bool {
        level >= self.level()
    }

    pub fn sink_count(&self) -> usize {
        self.inner.sinks.load().len()
    }

    pub fn has_sinks(&self) -> bool {
        self.sink_count() > 0
    }

    /// Attach `make_sink()` only if no sink is attached yet.
    ///
    /// Returns `true` if this call attached the sink. The factory runs at
    /// most once and is skipped entirely when sinks are already present.
    pub fn attach_if_empty<F>(&self, make_sink: F) -> bool
    where
        F: FnOnce() -> Arc<dyn Sink>,
    {
        let current = self.inner.sinks.load_full();
        if !current.is_empty() {
            return false;
        }
        let next = Arc::new(vec![make_sink()]);
        let previous = self.inner.sinks.compare_and_swap(&current, next);
        Arc::ptr_eq(&*previous, &current)
    }

    /// Attach an additional sink unconditionally.
    pub fn add_sink(&self, sink: Arc<dyn Sink>) {
        self.inner.sinks.rcu(|sinks| {
            let mut next = SinkList::clone(sinks);
            next.push(Arc::clone(&sink));
            next
        });
    }

    /// Move every attached sink to `level`.
    pub fn set_sink_thresholds(&self, level: SeverityLevel) {
        for sink in self.inner.sinks.load().iter() {
            sink.set_threshold(level);
        }
    }

    /// Emit `args` at `level`, attributed to `function`.
    ///
    /// Write failures are reported as `tracing` warnings and do not reach the
    /// caller; the remaining sinks still receive the record.
    pub fn log(&self, level: SeverityLevel, function: &str, args: fmt::Arguments<'_>) {
        if !self.is_enabled_for(level) {
            return;
        }
        let record = Record::now(&self.inner.name, level, function, args);
        let sinks = self.inner.sinks.load();
        for sink in sinks.iter().filter(|sink| sink.accepts(level)) {
            if let Err(err) = sink.emit(&record) {
                tracing::warn!(name = %self.inner.name, error = %err, "Sink write failed");
            }
        }
    }

    pub fn debug(&self, function: &str, args: fmt::Arguments<'_>) {
        self.log(SeverityLevel::Debug, function, args);
    }

    pub fn info(&self, function: &str, args: fmt::Arguments<'_>) {
        self.log(SeverityLevel::Info, function, args);
    }

    pub fn warning(&self, function: &str, args: fmt::Arguments<'_>) {
        self.log(SeverityLevel::Warning, function, args);
    }

    pub fn error(&self, function: &str, args: fmt::Arguments<'_>) {
        self.log(SeverityLevel::Error, function, args);
    }

    pub fn critical(&self, function: &str, args: fmt::Arguments<'_>) {
        self.log(SeverityLevel::Critical, function, args);
    }

    /// Whether both handles refer to the same logger.
    pub fn ptr_eq(&self, other: &LoggerHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for LoggerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerHandle")
            .field("name", &self.inner.name)
            .field("level", &self.level())
            .field("sinks", &self.sink_count())
            .finish()
    }
}

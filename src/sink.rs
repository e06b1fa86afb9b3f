//! Output sinks.
//!
//! A sink owns a destination and its own threshold. Handles fan records out to
//! every attached sink; a sink silently skips records below its threshold.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Mutex;

use crate::format::{LineFormat, Record};
use crate::level::SeverityLevel;

/// Destination for formatted records.
pub trait Sink: Send + Sync {
    /// Lowest level this sink writes.
    fn threshold(&self) -> SeverityLevel;

    /// Replace the threshold.
    fn set_threshold(&self, level: SeverityLevel);

    /// Write `record`. Callers have already checked the threshold.
    fn emit(&self, record: &Record<'_>) -> io::Result<()>;

    /// Whether `level` passes this sink's threshold.
    fn accepts(&self, level: SeverityLevel) -> bool {
        level >= self.threshold()
    }
}

/// Writes one line per record to a byte stream.
pub struct StreamSink {
    writer: Mutex<Box<dyn Write + Send>>,
    threshold: AtomicU8,
    format: LineFormat,
}

impl StreamSink {
    pub fn new<W: Write + Send + 'static>(writer: W, threshold: SeverityLevel) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            threshold: AtomicU8::new(threshold.as_u8()),
            format: LineFormat,
        }
    }

    /// Console sink on the process's standard output.
    pub fn stdout(threshold: SeverityLevel) -> Self {
        Self::new(io::stdout(), threshold)
    }
}

impl Sink for StreamSink {
    fn threshold(&self) -> SeverityLevel {
        SeverityLevel::from_u8(self.threshold.load(Ordering::Relaxed)).unwrap_or_default()
    }

    fn set_threshold(&self, level: SeverityLevel) {
        self.threshold.store(level.as_u8(), Ordering::Relaxed);
    }

    fn emit(&self, record: &Record<'_>) -> io::Result<()> {
        // A panic mid-write poisons the lock; the writer itself is still usable.
        let mut writer = self.writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        self.format.write_line(&mut *writer, record)?;
        writer.flush()
    }
}

impl std::fmt::Debug for StreamSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamSink")
            .field("threshold", &self.threshold())
            .finish_non_exhaustive()
    }
}

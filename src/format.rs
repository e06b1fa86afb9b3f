//! Line formatting.
//!
//! Every emitted record becomes exactly one line:
//!
//! ```text
//! 2024-05-01 09:30:12,345 - AxonOpsLogger - WARNING - check_disk - disk usage high
//! ```

use std::fmt;
use std::io;

use chrono::{DateTime, Local};

use crate::level::SeverityLevel;

/// `strftime` pattern for the leading timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Placeholder used when the calling function cannot be determined.
pub const UNKNOWN_FUNCTION: &str = "<unknown>";

/// A single message on its way to the sinks.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub logger: &'a str,
    pub level: SeverityLevel,
    pub function: &'a str,
    pub args: fmt::Arguments<'a>,
    pub timestamp: DateTime<Local>,
}

impl<'a> Record<'a> {
    /// Build a record stamped with the current local time.
    pub fn now(
        logger: &'a str,
        level: SeverityLevel,
        function: &'a str,
        args: fmt::Arguments<'a>,
    ) -> Self {
        Self {
            logger,
            level,
            function,
            args,
            timestamp: Local::now(),
        }
    }
}

/// The fixed `<timestamp> - <name> - <severity> - <function> - <message>` template.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormat;

impl LineFormat {
    /// Write one newline-terminated line for `record`.
    pub fn write_line<W: io::Write + ?Sized>(&self, writer: &mut W, record: &Record<'_>) -> io::Result<()> {
        writeln!(writer, "{}", Line { record })
    }

    /// Render `record` without the trailing newline.
    pub fn format(&self, record: &Record<'_>) -> String {
        Line { record }.to_string()
    }
}

struct Line<'r, 'a> {
    record: &'r Record<'a>,
}

impl fmt::Display for Line<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.record;
        let function = if r.function.is_empty() { UNKNOWN_FUNCTION } else { r.function };
        write!(
            f,
            "{} - {} - {} - {} - {}",
            r.timestamp.format(TIMESTAMP_FORMAT),
            r.logger,
            r.level,
            function,
            r.args
        )
    }
}

/// Reduce a fully qualified path to its last meaningful segment.
///
/// `my_app::disk::check_disk::{{closure}}` becomes `check_disk`;
/// `my_app::Monitor<u8>::poll` becomes `poll`.
pub fn short_function_name(path: &str) -> &str {
    path.rsplit("::")
        .find(|segment| !segment.is_empty() && !segment.starts_with("{{"))
        .unwrap_or(UNKNOWN_FUNCTION)
}

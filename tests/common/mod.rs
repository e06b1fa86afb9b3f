//! Shared utilities for integration tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use axonops_logger::{SeverityLevel, Sink, StreamSink};

/// In-memory writer that can be cloned into a sink and read back afterwards.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct CaptureBuffer(Arc<Mutex<Vec<u8>>>);

#[allow(dead_code)]
impl CaptureBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink writing into this buffer.
    pub fn sink(&self, level: SeverityLevel) -> Arc<dyn Sink> {
        Arc::new(StreamSink::new(self.clone(), level))
    }

    pub fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Split a formatted line into its five columns.
#[allow(dead_code)]
pub fn columns(line: &str) -> Vec<&str> {
    line.splitn(5, " - ").collect()
}

/// Whether `ts` looks like `2024-05-01 09:30:12,345`.
#[allow(dead_code)]
pub fn is_timestamp(ts: &str) -> bool {
    let bytes = ts.as_bytes();
    bytes.len() == 23
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes[10] == b' '
        && bytes[13] == b':'
        && bytes[16] == b':'
        && bytes[19] == b','
        && ts
            .chars()
            .enumerate()
            .all(|(i, c)| matches!(i, 4 | 7 | 10 | 13 | 16 | 19) || c.is_ascii_digit())
}

//! Bridge from `tracing` events into a logger handle.
//!
//! Lets code that already logs through `tracing` macros write lines in the
//! handle's fixed format. The function column is the innermost span's name,
//! which is the function name for `#[tracing::instrument]` spans. Outside any
//! span it falls back to the last segment of the event's module path.

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::format::{short_function_name, UNKNOWN_FUNCTION};
use crate::handle::LoggerHandle;
use crate::level::SeverityLevel;

/// `tracing_subscriber` layer that forwards events to a [`LoggerHandle`].
#[derive(Debug, Clone)]
pub struct HandleLayer {
    handle: LoggerHandle,
}

impl HandleLayer {
    pub fn new(handle: LoggerHandle) -> Self {
        Self { handle }
    }

    pub fn handle(&self) -> &LoggerHandle {
        &self.handle
    }
}

impl<S> Layer<S> for HandleLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();
        // Our own diagnostics would otherwise feed back into the handle.
        if metadata.target().starts_with(env!("CARGO_CRATE_NAME")) {
            return;
        }
        let level = SeverityLevel::from(*metadata.level());
        if !self.handle.is_enabled_for(level) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let function = ctx
            .event_span(event)
            .map(|span| span.name())
            .or_else(|| metadata.module_path().map(short_function_name))
            .unwrap_or(UNKNOWN_FUNCTION);

        self.handle.log(level, function, format_args!("{}", visitor.finish()));
    }
}

/// Install a global subscriber whose only layer writes to `handle`.
///
/// Fails if a global subscriber is already set.
pub fn install(handle: LoggerHandle) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(HandleLayer::new(handle))
        .try_init()
}

/// Collects the `message` field and renders the rest as `key=value`.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }

    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={}", name, value);
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.push_field(field.name(), format_args!("{}", value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            self.push_field(field.name(), format_args!("{:?}", value));
        }
    }
}

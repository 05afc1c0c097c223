//! Tracing layer that forwards formatted log lines to a sink (the TUI's Logs screen).

use std::fmt::Write;

use tracing::field::Visit;
use tracing_subscriber::layer::{Context, Layer};

use crate::config::LogSink;

/// Longest line handed to the sink; longer lines are cut and annotated.
pub const MAX_LINE_LEN: usize = 4_000;

/// Builds a single line from an event: "[LEVEL] target: message key=value ..."
struct LineVisitor {
    buf: String,
}

impl LineVisitor {
    fn new() -> Self {
        Self {
            buf: String::with_capacity(256),
        }
    }

    fn separator(&mut self) {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
    }

    fn finish(self) -> String {
        self.buf
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.separator();
        if field.name() == "message" {
            self.buf.push_str(value);
        } else {
            write!(self.buf, "{}={:?}", field.name(), value).ok();
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.separator();
        if field.name() == "message" {
            write!(self.buf, "{:?}", value).ok();
        } else {
            write!(self.buf, "{}={:?}", field.name(), value).ok();
        }
    }
}

/// Layer that sends each formatted event to the given sink when present. The sink must not block.
pub fn log_sink_layer(sink: Option<LogSink>) -> LogSinkLayer {
    LogSinkLayer { sink }
}

#[derive(Clone)]
pub struct LogSinkLayer {
    sink: Option<LogSink>,
}

/// `[LEVEL] target: fields`, cut at [MAX_LINE_LEN] chars.
pub fn format_line(level: &tracing::Level, target: &str, rest: &str) -> String {
    let line = if rest.is_empty() {
        format!("[{}] {}", level, target)
    } else {
        format!("[{}] {}: {}", level, target, rest)
    };
    let chars = line.chars().count();
    if chars > MAX_LINE_LEN {
        let trunc: String = line.chars().take(MAX_LINE_LEN).collect();
        format!("{}… ({} chars)", trunc, chars)
    } else {
        line
    }
}

impl<S> Layer<S> for LogSinkLayer
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let Some(sink) = &self.sink else {
            return;
        };
        let mut visitor = LineVisitor::new();
        event.record(&mut visitor);
        sink(format_line(event.metadata().level(), event.metadata().target(), &visitor.finish()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_line_without_fields() {
        assert_eq!(format_line(&tracing::Level::INFO, "hexvibe", ""), "[INFO] hexvibe");
    }

    #[test]
    fn long_line_is_truncated() {
        let rest = "x".repeat(MAX_LINE_LEN + 10);
        let line = format_line(&tracing::Level::WARN, "t", &rest);
        assert!(line.ends_with(&format!("({} chars)", MAX_LINE_LEN + 10 + "[WARN] t: ".len())));
        assert!(line.chars().count() < MAX_LINE_LEN + 30);
    }
}

//! Utility functions for tracing

/// Span around one palette operation.
///
/// # Example
///
/// ```rust
/// use hexvibe_observability::palette_span;
///
/// let span = palette_span!("harmony", "complementary");
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! palette_span {
    ($operation:expr) => {
        tracing::info_span!(
            "palette.operation",
            operation = $operation,
            detail = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
    ($operation:expr, $detail:expr) => {
        tracing::info_span!(
            "palette.operation",
            operation = $operation,
            detail = $detail,
            duration_ms = tracing::field::Empty,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
}

/// Record an error on the current span and emit an error event.
pub fn record_error<E: std::fmt::Display + ?Sized>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", true);
    span.record("error.message", error.to_string());
    tracing::error!(error = %error, "Operation failed");
}

/// Record a duration (milliseconds) on the current span.
///
/// # Example
///
/// ```rust
/// use hexvibe_observability::record_duration;
/// use std::time::Instant;
///
/// let start = Instant::now();
/// // ... operation ...
/// record_duration("duration_ms", start.elapsed());
/// ```
pub fn record_duration(key: &str, duration: std::time::Duration) {
    let span = tracing::Span::current();
    span.record(key, duration.as_millis() as u64);
}

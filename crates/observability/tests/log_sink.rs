use std::sync::{Arc, Mutex};

use hexvibe_observability::{log_sink_layer, palette_span, record_duration, record_error};
use tracing_subscriber::layer::SubscriberExt;

fn capture() -> (Arc<Mutex<Vec<String>>>, impl tracing::Subscriber + Send + Sync) {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let sink_lines = Arc::clone(&lines);
    let layer = log_sink_layer(Some(Arc::new(move |line: String| {
        sink_lines.lock().unwrap().push(line);
    })));
    (lines, tracing_subscriber::registry().with(layer))
}

#[test]
fn events_reach_the_sink_as_lines() {
    let (lines, subscriber) = capture();
    tracing::subscriber::with_default(subscriber, || {
        tracing::info!(target: "hexvibe_core", id = "abc", "palette saved");
        tracing::warn!("stored history is corrupt");
    });

    let lines = lines.lock().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "[INFO] hexvibe_core: palette saved id=\"abc\"");
    assert!(lines[1].starts_with("[WARN] "));
    assert!(lines[1].ends_with("stored history is corrupt"));
}

#[test]
fn record_helpers_emit_inside_span() {
    let (lines, subscriber) = capture();
    tracing::subscriber::with_default(subscriber, || {
        let span = palette_span!("export", "json");
        let _guard = span.enter();
        record_duration("duration_ms", std::time::Duration::from_millis(12));
        let err = std::io::Error::other("disk full");
        record_error(&err);
    });

    let lines = lines.lock().unwrap();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("[ERROR]"));
    assert!(lines[0].contains("disk full"));
}

#[test]
fn no_sink_is_a_no_op() {
    let subscriber = tracing_subscriber::registry().with(log_sink_layer(None));
    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("nobody listens");
    });
}

//! Configuration for logging

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Sink for formatted log lines (the TUI's Logs screen). Called from the tracing layer; must not block.
pub type LogSink = Arc<dyn Fn(String) + Send + Sync>;

/// Env var read before `RUST_LOG`.
pub const LOG_ENV: &str = "HEXVIBE_LOG";

#[derive(Clone)]
pub struct ObservabilityConfig {
    /// Service name recorded on the startup event (`hexvibe-cli`, `hexvibe-tui`)
    pub service_name: String,

    pub service_version: Option<String>,

    /// Human-readable output on stderr. Off for the TUI, which owns the terminal.
    pub enable_console: bool,

    /// Log level filter (e.g., "info", "hexvibe_llms=debug").
    /// Defaults to "info" if not set
    pub log_level: Option<String>,

    /// Append plain-text logs to this file.
    pub log_file: Option<PathBuf>,

    /// Optional sink for each formatted log line. Not serialized.
    pub log_sink: Option<LogSink>,
}

// Serde can't handle Arc<dyn Fn>, so the sink is skipped by hand.
impl Serialize for ObservabilityConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("ObservabilityConfig", 5)?;
        s.serialize_field("service_name", &self.service_name)?;
        s.serialize_field("service_version", &self.service_version)?;
        s.serialize_field("enable_console", &self.enable_console)?;
        s.serialize_field("log_level", &self.log_level)?;
        s.serialize_field("log_file", &self.log_file)?;
        s.end()
    }
}

impl<'de> Deserialize<'de> for ObservabilityConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ObservabilityConfigDe {
            #[serde(default = "default_service_name")]
            service_name: String,
            service_version: Option<String>,
            #[serde(default)]
            enable_console: bool,
            log_level: Option<String>,
            log_file: Option<PathBuf>,
        }
        fn default_service_name() -> String {
            "hexvibe".to_string()
        }
        let de = ObservabilityConfigDe::deserialize(deserializer)?;
        Ok(ObservabilityConfig {
            service_name: de.service_name,
            service_version: de.service_version,
            enable_console: de.enable_console,
            log_level: de.log_level,
            log_file: de.log_file,
            log_sink: None,
        })
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "hexvibe".to_string(),
            service_version: None,
            enable_console: true,
            log_level: None,
            log_file: None,
            log_sink: None,
        }
    }
}

impl std::fmt::Debug for ObservabilityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservabilityConfig")
            .field("service_name", &self.service_name)
            .field("service_version", &self.service_version)
            .field("enable_console", &self.enable_console)
            .field("log_level", &self.log_level)
            .field("log_file", &self.log_file)
            .field("log_sink", &self.log_sink.as_ref().map(|_| "Some(LogSink)"))
            .finish()
    }
}

impl ObservabilityConfig {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.service_version = Some(version.into());
        self
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Sink for runtime log lines. Called from the tracing layer; must not block.
    pub fn with_log_sink(mut self, sink: LogSink) -> Self {
        self.log_sink = Some(sink);
        self
    }

    /// Reads `HEXVIBE_LOG`, then `RUST_LOG`, for the level filter.
    pub fn from_env(service_name: impl Into<String>) -> Self {
        let log_level = std::env::var(LOG_ENV)
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()
            .filter(|v| !v.trim().is_empty());

        Self {
            log_level,
            ..Self::new(service_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let config = ObservabilityConfig::new("hexvibe-tui")
            .with_console(false)
            .with_log_level("debug")
            .with_log_file("/tmp/hexvibe.log")
            .with_log_sink(Arc::new(|_line: String| {}));
        assert_eq!(config.service_name, "hexvibe-tui");
        assert!(!config.enable_console);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert!(config.log_sink.is_some());
        assert!(format!("{config:?}").contains("Some(LogSink)"));
    }

    #[test]
    fn serde_skips_sink() {
        let config = ObservabilityConfig::new("x").with_log_sink(Arc::new(|_: String| {}));
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("log_sink"));
        let back: ObservabilityConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.service_name, "x");
        assert!(back.log_sink.is_none());
    }
}

//! Global subscriber setup: env filter, console, log file and log sink.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;
use crate::log_sink_layer;

/// `config.log_level`, else `RUST_LOG`, else `info`. A bad directive is a config error.
pub fn build_filter(config: &ObservabilityConfig) -> Result<EnvFilter, ObservabilityError> {
    match config.log_level.as_deref() {
        Some(level) => EnvFilter::try_new(level).map_err(|e| ObservabilityError::Config(format!("{level}: {e}"))),
        None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))),
    }
}

/// Install the global subscriber. Fails if one is already set.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    let env_filter = build_filter(&config)?;

    // Build layers first (build separately, then compose once to avoid type mismatch)
    let console_layer = config
        .enable_console
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let file_layer = match &config.log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| ObservabilityError::InitFailed(format!("{}: {e}", path.display())))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    let sink_layer = log_sink_layer::log_sink_layer(config.log_sink.clone());

    Registry::default()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .with(sink_layer)
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    tracing::debug!(
        service.name = %config.service_name,
        service.version = config.service_version.as_deref().unwrap_or("unknown"),
        log_file = ?config.log_file,
        "Tracing initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_level_is_used() {
        let config = ObservabilityConfig::new("t").with_log_level("hexvibe_core=debug,warn");
        assert!(build_filter(&config).is_ok());
    }

    #[test]
    fn bad_directive_is_config_error() {
        let config = ObservabilityConfig::new("t").with_log_level("hexvibe_core=notalevel");
        assert!(matches!(build_filter(&config), Err(ObservabilityError::Config(_))));
    }
}

//! HexVibe observability: one place to install the tracing subscriber.
//!
//! # Quick Start
//!
//! ```no_run
//! use hexvibe_observability::{ObservabilityConfig, init};
//!
//! let config = ObservabilityConfig::from_env("hexvibe-cli").with_log_level("info");
//! init(config)?;
//!
//! tracing::info!("started");
//! # Ok::<(), hexvibe_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `HEXVIBE_LOG` or `RUST_LOG` - Log level filter

pub mod config;
pub mod error;
pub mod log_sink_layer;
pub mod telemetry;
pub mod tracing;

pub use config::{LogSink, ObservabilityConfig};
pub use error::ObservabilityError;
pub use log_sink_layer::{LogSinkLayer, log_sink_layer};
pub use telemetry::init;
pub use tracing::{record_duration, record_error};

//! # Vocabkit Telemetry
//!
//! Logging configuration and `tracing` subscriber setup.

pub mod logging;

use serde::{Deserialize, Serialize};

pub use logging::{init_logging, LogLevel};

/// Telemetry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Log level used when `RUST_LOG` is not set
    pub log_level: LogLevel,
    /// Include the event target (module path) in output
    pub with_target: bool,
    /// Emit newline-delimited JSON instead of human readable lines
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            with_target: true,
            json: false,
        }
    }
}

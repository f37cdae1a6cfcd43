//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for log output.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to every log line
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error) or full directive
    pub log_level: String,

    /// Whether to enable JSON formatted logs
    pub json_logs: bool,

    /// Route output through the libtest capture writer
    pub test_writer: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "pin-exchange".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            test_writer: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PX_SERVICE_NAME`: Service name (default: pin-exchange)
    /// - `PX_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `PX_JSON_LOGS`: Enable JSON logs (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            service_name: lookup("PX_SERVICE_NAME").unwrap_or_else(|| "pin-exchange".to_string()),

            log_level: lookup("PX_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or_else(|| "info".to_string()),

            json_logs: lookup("PX_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),

            test_writer: false,
        }
    }

    /// Configuration for test harnesses: debug level, captured output.
    pub fn for_tests() -> Self {
        Self {
            log_level: "debug".to_string(),
            test_writer: true,
            ..Default::default()
        }
    }
}

//! # Pin Telemetry
//!
//! Structured logging bootstrap for the pin exchange workspace.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pin_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() {
//!     init_logging(&TelemetryConfig::from_env()).expect("Failed to init logging");
//!
//!     // tracing macros now emit through the configured subscriber
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PX_SERVICE_NAME` | `pin-exchange` | Service name in logs |
//! | `PX_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `PX_JSON_LOGS` | `false` | JSON output |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("A global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Installs logging for a test binary, ignoring a subscriber that is
/// already in place.
pub fn init_test_logging() {
    let _ = init_logging(&TelemetryConfig::for_tests());
}

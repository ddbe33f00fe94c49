//! # Docs Telemetry
//!
//! Logging setup shared by the docs pipeline binaries.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use docs_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_logging(&TelemetryConfig::from_env())?;
//!     // Logs from every bd-* crate are now emitted
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `BD_SERVICE_NAME` | `bifrost-docs` | Service name in logs |
//! | `BD_LOG_LEVEL` | `info` | Log level filter |
//! | `BD_JSON_LOGS` | `false` (`true` when `CI` is set) | JSON output |
//! | `BD_CONSOLE_OUTPUT` | `true` | Emit logs at all |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{env_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    Filter(String),

    #[error("Failed to install subscriber: {0}")]
    SubscriberInit(String),
}

/// Convenience macro for creating a span with subsystem context.
///
/// # Example
///
/// ```rust,ignore
/// use docs_telemetry::subsystem_span;
///
/// fn render() {
///     let _span = subsystem_span!("render_page", subsystem = "bd-03", page = "concepts/p2p").entered();
/// }
/// ```
#[macro_export]
macro_rules! subsystem_span {
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}

//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for docs pipeline logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name attached to every log line
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error) or a full
    /// `EnvFilter` directive
    pub log_level: String,

    /// Whether to enable console output
    pub console_output: bool,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "bifrost-docs".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `BD_SERVICE_NAME`: Service name (default: bifrost-docs)
    /// - `BD_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `BD_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `BD_JSON_LOGS`: Enable JSON logs (default: false, true in CI)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let is_ci = lookup("CI").is_some();

        Self {
            service_name: lookup("BD_SERVICE_NAME").unwrap_or_else(|| "bifrost-docs".to_string()),

            log_level: lookup("BD_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or_else(|| "info".to_string()),

            console_output: lookup("BD_CONSOLE_OUTPUT")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),

            json_logs: lookup("BD_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(is_ci),
        }
    }

    /// Override the log level (e.g. from a `--verbose` flag)
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}

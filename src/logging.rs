//! Logging System
//!
//! Structured logging via the `tracing` crate. Output goes to stderr so the
//! processed-file count printed on stdout stays machine-readable.

use crate::error::MutateError;
use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Enable colored output (text format only)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            color: default_true(),
        }
    }
}

/// Initialize the logging system.
///
/// Priority order (highest to lowest):
/// 1. Environment variables (RESTRING_LOG, RESTRING_LOG_FORMAT)
/// 2. Configuration (CLI flags merged over the config file by the caller)
/// 3. Defaults
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), MutateError> {
    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let use_color = config.map(|c| c.color).unwrap_or(true);

    let base_subscriber = Registry::default().with(filter);

    if format == "json" {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

/// Build environment filter from config or the RESTRING_LOG variable
fn build_env_filter(config: Option<&LoggingConfig>) -> Result<EnvFilter, MutateError> {
    if let Ok(filter) = EnvFilter::try_from_env("RESTRING_LOG") {
        return Ok(filter);
    }

    let level = config.map(|c| c.level.as_str()).unwrap_or("warn");
    EnvFilter::try_new(level)
        .map_err(|e| MutateError::Config(format!("Invalid log level {:?}: {}", level, e)))
}

/// Determine output format from config or environment
fn determine_format(config: Option<&LoggingConfig>) -> Result<String, MutateError> {
    if let Ok(format) = std::env::var("RESTRING_LOG_FORMAT") {
        if format == "json" || format == "text" {
            return Ok(format);
        }
    }

    let format = config.map(|c| c.format.as_str()).unwrap_or("text");
    if format != "json" && format != "text" {
        return Err(MutateError::Config(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            format
        )));
    }

    Ok(format.to_string())
}

//! Structured logging with tracing
//!
//! Installs the global `tracing` subscriber. Registry trace events are
//! emitted at debug level under the `svl::registry` target, so
//! `SVL_LOG=svl::registry=debug` shows them without raising other output.

use crate::constants::{DEFAULT_LOG_FILE_STEM, LOG_FILTER_ENV};
use crate::error_ext::ErrorContext;
use std::path::Path;
use svl_core::{Error, Result};
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// Re-export LoggingConfig for convenience
pub use crate::config::LoggingConfig;

/// Initialize logging with the provided configuration
///
/// # Errors
///
/// Fails on an unknown log level, or when a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_appender = config.file_output.as_deref().map(|path| {
        tracing_appender::rolling::daily(
            path.parent().unwrap_or_else(|| Path::new(".")),
            path.file_stem()
                .unwrap_or_else(|| std::ffi::OsStr::new(DEFAULT_LOG_FILE_STEM)),
        )
    });

    // json and plain layers have different types, hence the branches
    let installed = if config.json_format {
        let stderr = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true);
        let registry = Registry::default().with(filter);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .json()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(stderr).with(file).try_init()
        } else {
            registry.with(stderr).try_init()
        }
    } else {
        let stderr = fmt::layer().with_writer(std::io::stderr).with_target(true);
        let registry = Registry::default().with(filter);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(stderr).with(file).try_init()
        } else {
            registry.with(stderr).try_init()
        }
    };

    installed.context("Failed to install tracing subscriber")?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
///
/// # Errors
///
/// Returns a configuration error for anything but trace/debug/info/warn/error.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}

//! Configuration types

use crate::constants::DEFAULT_LOG_LEVEL;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use svl_core::DEFAULT_TRACE_PREFIX;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvlConfig {
    /// Registry behaviour and diagnostics
    pub registry: RegistryConfig,

    /// Process-wide logging
    pub logging: LoggingConfig,
}

/// Registry configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Report dependency cycles as errors instead of recursing
    pub detect_cycles: bool,

    /// Where registry trace lines go
    pub trace: TraceConfig,
}

/// Destination of registry trace lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceSinkKind {
    /// `tracing` debug events
    #[default]
    Tracing,
    /// Prefixed lines on standard error
    Stderr,
    /// Discard
    None,
}

/// Trace configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Sink kind
    pub sink: TraceSinkKind,

    /// Line prefix for the stderr sink
    pub prefix: String,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            sink: TraceSinkKind::default(),
            prefix: DEFAULT_TRACE_PREFIX.to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to file in addition to stderr
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

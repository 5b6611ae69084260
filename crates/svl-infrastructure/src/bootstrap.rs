//! Registry bootstrap
//!
//! Turns configuration into a ready [`Registry`]. Composition roots call
//! [`init_app`] once, then register their slots and hooks on the result.

use crate::config::{RegistryConfig, SvlConfig, TraceConfig, TraceSinkKind};
use crate::logging::init_logging;
use svl_core::{NullSink, Registry, RegistryOptions, Result, StderrSink, TraceSink, TracingSink};
use tracing::info;

/// Registry options derived from configuration
pub fn registry_options(config: &RegistryConfig) -> RegistryOptions {
    RegistryOptions {
        detect_cycles: config.detect_cycles,
    }
}

/// Trace sink selected by configuration
pub fn trace_sink(config: &TraceConfig) -> Box<dyn TraceSink> {
    match config.sink {
        TraceSinkKind::Tracing => Box::new(TracingSink),
        TraceSinkKind::Stderr => Box::new(StderrSink::new(config.prefix.clone())),
        TraceSinkKind::None => Box::new(NullSink),
    }
}

/// Build an empty registry from configuration
pub fn build_registry(config: &RegistryConfig) -> Registry {
    let registry = Registry::with_options(registry_options(config), trace_sink(&config.trace));
    info!(
        detect_cycles = config.detect_cycles,
        sink = ?config.trace.sink,
        "Registry created"
    );
    registry
}

/// Initialize logging and build the registry
///
/// # Errors
///
/// Fails if logging cannot be installed.
pub fn init_app(config: &SvlConfig) -> Result<Registry> {
    init_logging(&config.logging)?;
    Ok(build_registry(&config.registry))
}

//! Configuration management
//!
//! Figment-based configuration: defaults, an optional TOML file, then
//! `SVL_`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, to_toml, validate_config};
pub use types::{LoggingConfig, RegistryConfig, SvlConfig, TraceConfig, TraceSinkKind};

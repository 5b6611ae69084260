//! # svl-infrastructure
//!
//! Cross-cutting concerns around the service registry: configuration
//! loading, logging setup, and building a [`svl_core::Registry`] from
//! configuration.
//!
//! ```ignore
//! let config = ConfigLoader::new().load()?;
//! let registry = bootstrap::init_app(&config)?;
//! ```

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{build_registry, init_app};
pub use config::{ConfigLoader, SvlConfig};

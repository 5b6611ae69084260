//! # svl
//!
//! Service locator for composition roots: typed slots resolved lazily and
//! memoized, plus ordered hooks.
//!
//! This facade re-exports the core registry and the infrastructure layer.
//!
//! ## Architecture
//!
//! - `locator` - tokens, registry, resolution, hooks, trace sinks
//! - `infrastructure` - configuration, logging, registry bootstrap
//! - `demo` - an example composition root used by the `svl` binary

/// Core registry - re-exported from `svl-core`
pub mod locator {
    pub use svl_core::*;
}

/// Infrastructure layer - re-exported from `svl-infrastructure`
pub mod infrastructure {
    pub use svl_infrastructure::*;
}

pub mod demo;

pub use svl_core::{Error, Hook, Listener, Registry, RegistryOptions, Result, Slot, listener};

//! # svl-core
//!
//! An in-process service locator: modules register how to build a service,
//! possibly from other services, and the composition root asks for the
//! finished value. Construction order falls out of first use, and every
//! service is built at most once per [`Registry`].
//!
//! ## Example
//!
//! ```
//! use std::rc::Rc;
//! use std::sync::LazyLock;
//! use svl_core::{Registry, Slot};
//!
//! struct Config {
//!     foo: String,
//! }
//!
//! struct Service {
//!     bar: String,
//! }
//!
//! static CONFIG: LazyLock<Slot<Rc<Config>>> = LazyLock::new(Slot::new);
//! static SERVICE: LazyLock<Slot<Rc<Service>>> = LazyLock::new(Slot::new);
//!
//! let registry = Registry::new();
//! registry.provide(*CONFIG, Rc::new(Config { foo: "foo".into() }));
//! registry.provide_lazy(*SERVICE, |reg| {
//!     let config = reg.resolve(*CONFIG)?;
//!     Ok(Rc::new(Service { bar: format!("{} baz", config.foo) }))
//! });
//!
//! let service = registry.resolve(*SERVICE)?;
//! assert_eq!(service.bar, "foo baz");
//! # Ok::<(), svl_core::Error>(())
//! ```
//!
//! ## Modules
//!
//! - [`token`] - typed identities for slots and hooks
//! - [`registry`] - the container and registration
//! - [`resolve`] - lazy, memoized resolution
//! - [`hook`] - ordered listener dispatch
//! - [`trace`] - pluggable diagnostics
//! - [`error`] - error type

mod entry;
pub mod error;
pub mod hook;
pub mod registry;
pub mod resolve;
pub mod token;
pub mod trace;

pub use error::{Error, Result};
pub use hook::{Listener, listener};
pub use registry::{Registry, RegistryOptions};
pub use token::{Hook, Slot, TokenId};
pub use trace::{
    DEFAULT_TRACE_PREFIX, MemorySink, NullSink, StderrSink, TraceEvent, TraceSink, TracingSink,
};

//! Registry diagnostics
//!
//! The registry reports what it does through a [`TraceSink`] it owns, so a
//! test can swap in a [`MemorySink`] without touching process-wide state.
//! Sinks observe only; nothing they do affects resolution.

use std::cell::RefCell;
use std::fmt;
use std::io::Write;
use std::rc::Rc;

/// Default line prefix of [`StderrSink`]
pub const DEFAULT_TRACE_PREFIX: &str = "[service locator] ";

/// Tracing target used by [`TracingSink`]
pub const TRACE_TARGET: &str = "svl::registry";

/// Something the registry did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    /// A value was stored eagerly
    ValueProvided {
        type_name: &'static str,
        value_type: &'static str,
    },
    /// A lazy constructor was stored
    LazyProvided { type_name: &'static str },
    /// A lazy slot was constructed for the first time
    SlotConfigured {
        type_name: &'static str,
        value_type: &'static str,
    },
    /// Listeners were attached to a hook
    HooksProvided {
        type_name: &'static str,
        listeners: usize,
    },
    /// A hook was dispatched
    HookDispatched {
        type_name: &'static str,
        value_type: &'static str,
    },
}

impl TraceEvent {
    /// Type label of the slot or hook involved
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::ValueProvided { type_name, .. }
            | Self::LazyProvided { type_name }
            | Self::SlotConfigured { type_name, .. }
            | Self::HooksProvided { type_name, .. }
            | Self::HookDispatched { type_name, .. } => *type_name,
        }
    }

    /// Short machine-friendly name of the event kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ValueProvided { .. } => "value_provided",
            Self::LazyProvided { .. } => "lazy_provided",
            Self::SlotConfigured { .. } => "slot_configured",
            Self::HooksProvided { .. } => "hooks_provided",
            Self::HookDispatched { .. } => "hook_dispatched",
        }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueProvided {
                type_name,
                value_type,
            } => write!(f, "[slot: {type_name}] provided value of type {value_type}"),
            Self::LazyProvided { type_name } => {
                write!(f, "[slot: {type_name}] inject lazy provider")
            }
            Self::SlotConfigured {
                type_name,
                value_type,
            } => write!(
                f,
                "[slot: {type_name}] configured service of type {value_type}"
            ),
            Self::HooksProvided {
                type_name,
                listeners,
            } => write!(f, "[hook: {type_name}] injecting {listeners} hooks"),
            Self::HookDispatched {
                type_name,
                value_type,
            } => write!(
                f,
                "[hook: {type_name}] calling hook with value of type {value_type}"
            ),
        }
    }
}

/// Receiver of registry diagnostics
pub trait TraceSink {
    /// Record one event
    fn record(&self, event: &TraceEvent);
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn record(&self, _event: &TraceEvent) {}
}

/// Forwards events to `tracing` at debug level
///
/// This is the registry default; output only appears once a subscriber is
/// installed (see `svl_infrastructure::logging::init_logging`).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn record(&self, event: &TraceEvent) {
        tracing::debug!(
            target: TRACE_TARGET,
            kind = event.kind(),
            type_name = event.type_name(),
            "{event}"
        );
    }
}

/// Writes one prefixed line per event to standard error
#[derive(Debug, Clone)]
pub struct StderrSink {
    prefix: String,
}

impl StderrSink {
    /// Create a sink with a custom line prefix
    pub fn new<S: Into<String>>(prefix: S) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Line prefix in use
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for StderrSink {
    fn default() -> Self {
        Self::new(DEFAULT_TRACE_PREFIX)
    }
}

impl TraceSink for StderrSink {
    fn record(&self, event: &TraceEvent) {
        // Diagnostics must never fail an operation, so write errors are dropped.
        let _ = writeln!(std::io::stderr().lock(), "{}{event}", self.prefix);
    }
}

/// Keeps every event in memory
///
/// Clones share the same buffer: hand one clone to the registry and inspect
/// the other.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Rc<RefCell<Vec<TraceEvent>>>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events
    pub fn events(&self) -> Vec<TraceEvent> {
        self.events.borrow().clone()
    }

    /// Recorded events rendered as trace lines
    pub fn lines(&self) -> Vec<String> {
        self.events.borrow().iter().map(ToString::to_string).collect()
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// True if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Drop all recorded events
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl TraceSink for MemorySink {
    fn record(&self, event: &TraceEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

impl<S: TraceSink + ?Sized> TraceSink for Box<S> {
    fn record(&self, event: &TraceEvent) {
        (**self).record(event);
    }
}

impl<S: TraceSink + ?Sized> TraceSink for Rc<S> {
    fn record(&self, event: &TraceEvent) {
        (**self).record(event);
    }
}

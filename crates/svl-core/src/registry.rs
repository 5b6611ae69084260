//! The service registry
//!
//! A [`Registry`] maps [`Slot`] tokens to services and [`Hook`] tokens to
//! ordered listener lists. It is the value passed around a composition root:
//! every lazy constructor and every listener receives it by shared reference
//! and may resolve other slots, register more entries, or dispatch hooks from
//! inside the callback.
//!
//! ## Lifecycle of a slot
//!
//! ```text
//! provide(slot, v)        ──►  Configured(v)
//! provide_lazy(slot, f)   ──►  Pending(f) ──resolve ok──►  Configured(f(reg))
//!                                  ▲            │
//!                                  └─resolve err┘
//! ```
//!
//! Registration always replaces the previous entry for the same token.
//!
//! ## Limitations
//!
//! The registry is single-threaded (`!Sync`). There is no teardown: values
//! live as long as the registry. Dependency cycles are not detected unless
//! [`RegistryOptions::detect_cycles`] is set; without it a cycle recurses
//! until the stack overflows.

use crate::entry::{HookEntry, SlotEntry, erase_constructor};
use crate::error::Result;
use crate::token::{Hook, Slot, TokenId};
use crate::trace::{TraceEvent, TraceSink, TracingSink};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Behaviour switches for a [`Registry`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryOptions {
    /// Report [`crate::Error::CyclicDependency`] instead of recursing forever
    pub detect_cycles: bool,
}

/// A slot currently being constructed
pub(crate) struct ResolvingFrame {
    pub(crate) id: TokenId,
    pub(crate) name: String,
}

/// Typed container of lazily constructed, memoized services
pub struct Registry {
    pub(crate) slots: RefCell<HashMap<TokenId, SlotEntry>>,
    pub(crate) hooks: RefCell<HashMap<TokenId, HookEntry>>,
    pub(crate) resolving: RefCell<Vec<ResolvingFrame>>,
    options: RegistryOptions,
    sink: Box<dyn TraceSink>,
}

impl Registry {
    /// Create an empty registry that traces through `tracing`
    pub fn new() -> Self {
        Self::with_options(RegistryOptions::default(), TracingSink)
    }

    /// Create an empty registry with a custom trace sink
    pub fn with_sink<S: TraceSink + 'static>(sink: S) -> Self {
        Self::with_options(RegistryOptions::default(), sink)
    }

    /// Create an empty registry with options and a trace sink
    pub fn with_options<S: TraceSink + 'static>(options: RegistryOptions, sink: S) -> Self {
        Self {
            slots: RefCell::new(HashMap::new()),
            hooks: RefCell::new(HashMap::new()),
            resolving: RefCell::new(Vec::new()),
            options,
            sink: Box::new(sink),
        }
    }

    /// Options this registry was created with
    pub fn options(&self) -> RegistryOptions {
        self.options
    }

    /// Store `value` for `slot`, replacing any previous entry, and hand it back
    ///
    /// Use this for services without dependencies and for plain values.
    pub fn provide<T: Clone + 'static>(&self, slot: Slot<T>, value: T) -> T {
        let type_name = slot.type_name();
        self.trace(&TraceEvent::ValueProvided {
            type_name,
            value_type: std::any::type_name_of_val(&value),
        });

        self.slots.borrow_mut().insert(
            slot.id(),
            SlotEntry::configured(type_name, Rc::new(value.clone())),
        );
        value
    }

    /// Store a constructor for `slot`, replacing any previous entry
    ///
    /// Nothing runs now. The constructor is called on the first
    /// [`resolve`](Self::resolve) and its result is cached; if it fails, the
    /// next resolve calls it again.
    pub fn provide_lazy<T, F>(&self, slot: Slot<T>, constructor: F)
    where
        T: Clone + 'static,
        F: Fn(&Registry) -> Result<T> + 'static,
    {
        let type_name = slot.type_name();
        self.trace(&TraceEvent::LazyProvided { type_name });

        self.slots.borrow_mut().insert(
            slot.id(),
            SlotEntry::pending(type_name, erase_constructor(constructor)),
        );
    }

    /// True if anything was provided for `slot`
    pub fn contains<T>(&self, slot: Slot<T>) -> bool {
        self.slots.borrow().contains_key(&slot.id())
    }

    /// True if `slot` holds a value (eager, or lazy and already built)
    pub fn is_configured<T>(&self, slot: Slot<T>) -> bool {
        self.slots
            .borrow()
            .get(&slot.id())
            .is_some_and(SlotEntry::is_configured)
    }

    /// True if listeners were provided for `hook`
    pub fn has_hook<T>(&self, hook: Hook<T>) -> bool {
        self.hooks.borrow().contains_key(&hook.id())
    }

    /// Number of registered slots
    pub fn slot_count(&self) -> usize {
        self.slots.borrow().len()
    }

    /// Number of registered hooks
    pub fn hook_count(&self) -> usize {
        self.hooks.borrow().len()
    }

    pub(crate) fn trace(&self, event: &TraceEvent) {
        self.sink.record(event);
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots = self.slots.try_borrow().map(|s| s.len()).ok();
        let hooks = self.hooks.try_borrow().map(|h| h.len()).ok();
        f.debug_struct("Registry")
            .field("slots", &slots)
            .field("hooks", &hooks)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

//! Lazy, memoized resolution
//!
//! There is no dependency graph. A constructor resolves whatever it needs
//! while it runs, so construction order is simply the order of first use.
//! The registry holds no `RefCell` borrow while a constructor runs.

use crate::entry::{Constructed, ErasedConstructor, ErasedValue, SlotState, downcast_value};
use crate::error::{Error, Result};
use crate::registry::{Registry, ResolvingFrame};
use crate::token::{Slot, TokenId};
use crate::trace::TraceEvent;
use std::rc::Rc;

enum Lookup {
    Ready(ErasedValue),
    Build(&'static str, ErasedConstructor),
}

/// Pops the resolving stack when construction ends, including by panic
struct FrameGuard<'a> {
    registry: &'a Registry,
}

impl Drop for FrameGuard<'_> {
    fn drop(&mut self) {
        self.registry.resolving.borrow_mut().pop();
    }
}

impl Registry {
    /// Get the value for `slot`, building it first if it is lazy and unbuilt
    ///
    /// # Errors
    ///
    /// - [`Error::NotRegistered`] if nothing was provided for `slot`
    /// - [`Error::CyclicDependency`] if cycle detection is on and `slot` is
    ///   already under construction
    /// - whatever the constructor returned, unchanged; the slot then stays
    ///   unbuilt and the next call retries
    pub fn resolve<T: Clone + 'static>(&self, slot: Slot<T>) -> Result<T> {
        let value = self.resolve_erased(slot)?;
        Ok(downcast_value::<T>(&value))
    }

    /// Same as [`resolve`](Self::resolve) but panics on error
    ///
    /// Meant for composition roots where a missing or broken service is a
    /// startup failure.
    pub fn resolve_or_panic<T: Clone + 'static>(&self, slot: Slot<T>) -> T {
        match self.resolve(slot) {
            Ok(value) => value,
            Err(err) => panic!("failed to resolve slot {slot}: {err}"),
        }
    }

    /// Build `slot` if needed and discard the value
    ///
    /// # Errors
    ///
    /// Same as [`resolve`](Self::resolve).
    pub fn invoke<T: 'static>(&self, slot: Slot<T>) -> Result<()> {
        self.resolve_erased(slot).map(|_| ())
    }

    /// Same as [`invoke`](Self::invoke) but panics on error
    pub fn invoke_or_panic<T: 'static>(&self, slot: Slot<T>) {
        if let Err(err) = self.invoke(slot) {
            panic!("failed to invoke slot {slot}: {err}");
        }
    }

    fn resolve_erased<T: 'static>(&self, slot: Slot<T>) -> Result<ErasedValue> {
        let lookup = {
            let slots = self.slots.borrow();
            let entry = slots.get(&slot.id()).ok_or(Error::NotRegistered {
                type_name: slot.type_name(),
                label: slot.label(),
            })?;
            match &entry.state {
                SlotState::Configured(value) => Lookup::Ready(Rc::clone(value)),
                SlotState::Pending(constructor) => {
                    Lookup::Build(entry.type_name, Rc::clone(constructor))
                }
            }
        };

        match lookup {
            Lookup::Ready(value) => Ok(value),
            Lookup::Build(type_name, constructor) => {
                let _frame = self.enter(slot.id(), slot.to_string())?;
                let constructed = constructor(self)?;
                Ok(self.store(slot.id(), type_name, &constructor, constructed))
            }
        }
    }

    /// Push `id` on the resolving stack, refusing re-entry when cycle detection is on
    fn enter(&self, id: TokenId, name: String) -> Result<FrameGuard<'_>> {
        let mut resolving = self.resolving.borrow_mut();
        if self.options().detect_cycles {
            if let Some(start) = resolving.iter().position(|frame| frame.id == id) {
                let mut chain: Vec<String> =
                    resolving[start..].iter().map(|f| f.name.clone()).collect();
                chain.push(name);
                return Err(Error::CyclicDependency { chain });
            }
        }
        resolving.push(ResolvingFrame { id, name });
        Ok(FrameGuard { registry: self })
    }

    /// Cache a freshly built value, unless the entry moved on meanwhile
    ///
    /// An entry that holds a value by now (built by a nested resolve, or
    /// re-provided eagerly) keeps it, and that value is returned. An entry
    /// replaced by another lazy registration is left alone; the built value
    /// still goes back to this caller.
    fn store(
        &self,
        id: TokenId,
        type_name: &'static str,
        constructor: &ErasedConstructor,
        constructed: Constructed,
    ) -> ErasedValue {
        let stored = {
            let mut slots = self.slots.borrow_mut();
            let Some(entry) = slots.get_mut(&id) else {
                return constructed.value;
            };
            let still_pending = match &entry.state {
                SlotState::Configured(existing) => return Rc::clone(existing),
                SlotState::Pending(current) => Rc::ptr_eq(current, constructor),
            };
            if still_pending {
                entry.state = SlotState::Configured(Rc::clone(&constructed.value));
            }
            still_pending
        };

        if stored {
            self.trace(&TraceEvent::SlotConfigured {
                type_name,
                value_type: constructed.value_type,
            });
        }
        constructed.value
    }
}

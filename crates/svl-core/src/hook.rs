//! Hooks: ordered extension points
//!
//! A module that owns an extension point creates a [`Hook`] and dispatches it
//! when it is ready, e.g. a router dispatching "mount your routes" with
//! itself as payload. The composition root decides which listeners run, and
//! in which order, with [`Registry::provide_hook`].

use crate::entry::{HookEntry, erase_listener};
use crate::error::{Error, Result};
use crate::registry::Registry;
use crate::token::Hook;
use crate::trace::TraceEvent;
use std::rc::Rc;

/// A hook listener receiving the registry and the dispatched payload
pub type Listener<T> = Box<dyn Fn(&Registry, &T) -> Result<()>>;

/// Box a closure as a [`Listener`], fixing its payload type
///
/// ```
/// use svl_core::{Listener, listener};
///
/// let listeners: Vec<Listener<Vec<String>>> = vec![
///     listener(|_, routes: &Vec<String>| {
///         assert!(routes.is_empty());
///         Ok(())
///     }),
/// ];
/// assert_eq!(listeners.len(), 1);
/// ```
pub fn listener<T, F>(f: F) -> Listener<T>
where
    F: Fn(&Registry, &T) -> Result<()> + 'static,
{
    Box::new(f)
}

impl Registry {
    /// Attach `listeners` to `hook`, in the given order
    ///
    /// Replaces any listeners provided earlier for the same hook.
    pub fn provide_hook<T, I>(&self, hook: Hook<T>, listeners: I)
    where
        T: 'static,
        I: IntoIterator<Item = Listener<T>>,
    {
        let listeners: Rc<[_]> = listeners.into_iter().map(erase_listener).collect();
        let type_name = hook.type_name();
        self.trace(&TraceEvent::HooksProvided {
            type_name,
            listeners: listeners.len(),
        });

        self.hooks
            .borrow_mut()
            .insert(hook.id(), HookEntry { type_name, listeners });
    }

    /// Run every listener of `hook` in order with `payload`
    ///
    /// Stops at the first failing listener. Listeners that already ran are not
    /// undone.
    ///
    /// # Errors
    ///
    /// - [`Error::HookNotRegistered`] if no listeners were provided for `hook`
    /// - the first listener error, unchanged
    pub fn dispatch<T: 'static>(&self, hook: Hook<T>, payload: T) -> Result<()> {
        let (type_name, listeners) = {
            let hooks = self.hooks.borrow();
            let entry = hooks.get(&hook.id()).ok_or(Error::HookNotRegistered {
                type_name: hook.type_name(),
                label: hook.label(),
            })?;
            (entry.type_name, Rc::clone(&entry.listeners))
        };

        self.trace(&TraceEvent::HookDispatched {
            type_name,
            value_type: std::any::type_name_of_val(&payload),
        });

        listeners
            .iter()
            .try_for_each(|listener| listener(self, &payload))
    }

    /// Same as [`dispatch`](Self::dispatch) but panics on error
    pub fn dispatch_or_panic<T: 'static>(&self, hook: Hook<T>, payload: T) {
        if let Err(err) = self.dispatch(hook, payload) {
            panic!("failed to dispatch hook {hook}: {err}");
        }
    }
}

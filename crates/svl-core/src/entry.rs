//! Type-erased registry entries
//!
//! Static typing is dropped when a value or callback goes into the registry
//! and recovered by a checked downcast on the way out. The typed token API
//! makes a failed downcast unreachable, so one is treated as a bug.

use crate::error::Result;
use crate::registry::Registry;
use std::any::Any;
use std::rc::Rc;

pub(crate) type ErasedValue = Rc<dyn Any>;
pub(crate) type ErasedConstructor = Rc<dyn Fn(&Registry) -> Result<Constructed>>;
pub(crate) type ErasedListener = Box<dyn Fn(&Registry, &dyn Any) -> Result<()>>;

/// Output of an erased constructor
pub(crate) struct Constructed {
    pub(crate) value: ErasedValue,
    pub(crate) value_type: &'static str,
}

pub(crate) enum SlotState {
    /// Lazy and not yet built
    Pending(ErasedConstructor),
    /// Built or provided eagerly; never replaced afterwards
    Configured(ErasedValue),
}

/// One registered slot
pub(crate) struct SlotEntry {
    pub(crate) type_name: &'static str,
    pub(crate) state: SlotState,
}

impl SlotEntry {
    pub(crate) fn configured(type_name: &'static str, value: ErasedValue) -> Self {
        Self {
            type_name,
            state: SlotState::Configured(value),
        }
    }

    pub(crate) fn pending(type_name: &'static str, constructor: ErasedConstructor) -> Self {
        Self {
            type_name,
            state: SlotState::Pending(constructor),
        }
    }

    pub(crate) fn is_configured(&self) -> bool {
        matches!(self.state, SlotState::Configured(_))
    }
}

/// Listeners attached to one hook, in registration order
pub(crate) struct HookEntry {
    pub(crate) type_name: &'static str,
    pub(crate) listeners: Rc<[ErasedListener]>,
}

pub(crate) fn erase_constructor<T, F>(constructor: F) -> ErasedConstructor
where
    T: 'static,
    F: Fn(&Registry) -> Result<T> + 'static,
{
    Rc::new(move |registry: &Registry| {
        let value = constructor(registry)?;
        Ok(Constructed {
            value_type: std::any::type_name_of_val(&value),
            value: Rc::new(value),
        })
    })
}

pub(crate) fn erase_listener<T: 'static>(
    listener: Box<dyn Fn(&Registry, &T) -> Result<()>>,
) -> ErasedListener {
    Box::new(move |registry: &Registry, payload: &dyn Any| {
        let Some(payload) = payload.downcast_ref::<T>() else {
            panic!(
                "illegal state: hook payload is not a {}",
                std::any::type_name::<T>()
            );
        };
        listener(registry, payload)
    })
}

/// Recover a typed clone of a stored value
pub(crate) fn downcast_value<T: Clone + 'static>(value: &ErasedValue) -> T {
    match value.downcast_ref::<T>() {
        Some(value) => value.clone(),
        None => panic!(
            "illegal state: slot value is not a {}",
            std::any::type_name::<T>()
        ),
    }
}

//! Slot and hook tokens
//!
//! A token is a typed, process-unique identity. Two tokens compare equal only
//! when one is a copy of the other; sharing the type parameter is not enough,
//! so several independent slots may carry the same `T`.
//!
//! ```
//! use std::sync::LazyLock;
//! use svl_core::Slot;
//!
//! static PRIMARY_DB: LazyLock<Slot<String>> = LazyLock::new(|| Slot::named("primary-db"));
//! static REPLICA_DB: LazyLock<Slot<String>> = LazyLock::new(|| Slot::named("replica-db"));
//!
//! assert_ne!(*PRIMARY_DB, *REPLICA_DB);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TOKEN_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> TokenId {
    TokenId(NEXT_TOKEN_ID.fetch_add(1, Ordering::Relaxed))
}

/// Type-erased identity of a slot or hook token, used as the map key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(u64);

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

macro_rules! token_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub struct $name<T> {
            id: TokenId,
            label: Option<&'static str>,
            _marker: PhantomData<fn() -> T>,
        }

        impl<T> $name<T> {
            /// Create a fresh token, distinct from every other token
            pub fn new() -> Self {
                Self {
                    id: next_id(),
                    label: None,
                    _marker: PhantomData,
                }
            }

            /// Create a fresh token carrying a label for diagnostics
            pub fn named(label: &'static str) -> Self {
                Self {
                    id: next_id(),
                    label: Some(label),
                    _marker: PhantomData,
                }
            }

            /// Identity of this token
            pub fn id(&self) -> TokenId {
                self.id
            }

            /// Diagnostic label, if one was given
            pub fn label(&self) -> Option<&'static str> {
                self.label
            }

            /// Name of `T`, used as the type label in diagnostics
            pub fn type_name(&self) -> &'static str {
                std::any::type_name::<T>()
            }
        }

        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        // Manual impls: derives would require `T: Clone` and friends.
        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $name<T> {}

        impl<T> PartialEq for $name<T> {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id
            }
        }

        impl<T> Eq for $name<T> {}

        impl<T> Hash for $name<T> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.id.hash(state);
            }
        }

        impl<T> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("id", &self.id)
                    .field("label", &self.label)
                    .field("type", &self.type_name())
                    .finish()
            }
        }

        impl<T> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.label {
                    Some(label) => write!(f, "{} ({label})", self.type_name()),
                    None => f.write_str(self.type_name()),
                }
            }
        }
    };
}

token_type! {
    /// Typed key under which a service or value of type `T` is registered
    Slot
}

token_type! {
    /// Typed key for an ordered extension point carrying a payload of type `T`
    Hook
}

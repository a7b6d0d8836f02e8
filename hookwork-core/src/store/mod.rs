//! External State Container
//!
//! The runtime talks to an external store through exactly three operations:
//! read the current state, subscribe to changes, and dispatch an action.
//! Anything implementing [`Store`] can back the selector and dispatch
//! hooks. [`ReducerStore`] is a minimal reducer-driven implementation.

mod reducer;

use std::rc::Rc;

use crate::value::Value;

pub use reducer::ReducerStore;

/// Callback invoked after the store state changes.
pub type Listener = Rc<dyn Fn()>;

/// Handle returned by [`Store::subscribe`]; calling it removes the listener.
pub type Unsubscribe = Box<dyn FnOnce()>;

/// The interface the runtime consumes from an external state container.
pub trait Store {
    /// Current state.
    fn state(&self) -> Value;

    /// Register `listener` to be called after every state change.
    fn subscribe(&self, listener: Listener) -> Unsubscribe;

    /// Send an action to the store.
    fn dispatch(&self, action: Value);
}

/// The store's dispatch entry point, as handed out by
/// [`use_dispatch`](crate::hooks::use_dispatch).
#[derive(Clone)]
pub struct Dispatch {
    store: Rc<dyn Store>,
}

impl Dispatch {
    pub fn new(store: Rc<dyn Store>) -> Self {
        Self { store }
    }

    /// Dispatch `action` to the store.
    pub fn call(&self, action: impl Into<Value>) {
        self.store.dispatch(action.into());
    }
}

impl std::fmt::Debug for Dispatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatch").finish_non_exhaustive()
    }
}

//! Reducer Store
//!
//! The smallest useful [`Store`]: state is replaced by
//! `reducer(state, action)` on every dispatch, and listeners are notified
//! afterwards in subscription order.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{Listener, Store, Unsubscribe};
use crate::value::Value;

type Reducer = Box<dyn Fn(&Value, &Value) -> Value>;
type Listeners = Rc<RefCell<Vec<(u64, Listener)>>>;

/// Reducer-driven state container.
pub struct ReducerStore {
    reducer: Reducer,
    state: RefCell<Value>,
    listeners: Listeners,
    next_listener: Cell<u64>,
}

impl ReducerStore {
    pub fn new<F>(reducer: F, initial: impl Into<Value>) -> Self
    where
        F: Fn(&Value, &Value) -> Value + 'static,
    {
        Self {
            reducer: Box::new(reducer),
            state: RefCell::new(initial.into()),
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_listener: Cell::new(0),
        }
    }

    /// Replace the state without running the reducer, then notify.
    pub fn replace_state(&self, state: impl Into<Value>) {
        *self.state.borrow_mut() = state.into();
        self.notify();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn notify(&self) {
        let snapshot: Vec<(u64, Listener)> = self.listeners.borrow().clone();
        for (id, listener) in snapshot {
            // A listener may unsubscribe others while we iterate.
            let live = self.listeners.borrow().iter().any(|(live, _)| *live == id);
            if live {
                listener();
            }
        }
    }
}

impl Store for ReducerStore {
    fn state(&self) -> Value {
        self.state.borrow().clone()
    }

    fn subscribe(&self, listener: Listener) -> Unsubscribe {
        let id = self.next_listener.get();
        self.next_listener.set(id + 1);
        self.listeners.borrow_mut().push((id, listener));

        let listeners = Rc::downgrade(&self.listeners);
        Box::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                listeners.borrow_mut().retain(|(live, _)| *live != id);
            }
        })
    }

    fn dispatch(&self, action: Value) {
        let next = {
            let state = self.state.borrow();
            (self.reducer)(&*state, &action)
        };
        *self.state.borrow_mut() = next;
        self.notify();
    }
}

impl std::fmt::Debug for ReducerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReducerStore")
            .field("state", &*self.state.borrow())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

//! Store Binding
//!
//! The link between one instance and the external store. It is created the
//! first time the instance calls a selector hook and lives until the
//! instance is disposed or reset; dropping it unsubscribes.
//!
//! The store listener pushes the latest store state into the binding and
//! schedules the owning instance directly. The instance is re-evaluated even
//! when an ancestor in purity mode decided not to re-render.

use std::cell::RefCell;
use std::rc::Rc;

use super::Instance;
use crate::store::{Store, Unsubscribe};
use crate::value::Value;

/// One live subscription from an instance to the external store.
pub struct StoreBinding {
    /// Latest state pushed by the store.
    state: Rc<RefCell<Value>>,

    unsubscribe: Option<Unsubscribe>,
}

impl StoreBinding {
    /// Subscribe `instance` to `store`.
    ///
    /// The listener holds only weak references, so neither the store nor the
    /// instance keeps the other alive.
    pub fn subscribe(store: Rc<dyn Store>, instance: &Rc<Instance>) -> Self {
        let state = Rc::new(RefCell::new(store.state()));

        let weak_store = Rc::downgrade(&store);
        let weak_instance = Rc::downgrade(instance);
        let listener_state = Rc::clone(&state);

        let unsubscribe = store.subscribe(Rc::new(move || {
            let (Some(store), Some(instance)) = (weak_store.upgrade(), weak_instance.upgrade()) else {
                return;
            };
            *listener_state.borrow_mut() = store.state();
            instance.request_update();
        }));

        tracing::debug!(component = %instance.id(), "subscribed to store");

        Self {
            state,
            unsubscribe: Some(unsubscribe),
        }
    }

    /// Latest store state seen by this binding.
    pub fn state(&self) -> Value {
        self.state.borrow().clone()
    }
}

impl Drop for StoreBinding {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
            tracing::debug!("unsubscribed from store");
        }
    }
}

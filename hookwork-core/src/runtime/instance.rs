//! Hook Instance
//!
//! An `Instance` is the persistent state behind one mounted component: its
//! slot store, the purity flag, the dirty flag accumulated during a render
//! pass, and the optional store binding.
//!
//! The component wrapper owns the instance and drives render passes through
//! it. Hooks reach it through the render context.

use std::cell::{Cell, RefCell};
use std::panic::Location;
use std::rc::{Rc, Weak};

use super::binding::StoreBinding;
use super::scheduler::Refresh;
use super::slot::{HookRecord, SlotStore};
use super::{ComponentId, HostContext};
use crate::error::{HookError, Result};
use crate::value::{shallow_eq, Value};

/// Persistent hook state of one mounted component.
pub struct Instance {
    id: ComponentId,

    host: HostContext,

    slots: RefCell<SlotStore>,

    /// Props of the current (or last) render pass.
    props: RefCell<Value>,

    /// Set once a render cache handle has been requested. Never cleared.
    pure: Cell<bool>,

    /// Dirty flag for the current pass. Only meaningful in purity mode.
    should_update: Cell<bool>,

    /// Lazily established subscription to the external store.
    binding: RefCell<Option<StoreBinding>>,

    disposed: Cell<bool>,

    /// The wrapper that re-renders this instance when it is scheduled.
    owner: Weak<dyn Refresh>,
}

impl Instance {
    pub(crate) fn new(host: HostContext, owner: Weak<dyn Refresh>, props: Value) -> Rc<Self> {
        let check_order = host.config().check_hook_order;
        Rc::new(Self {
            id: ComponentId::new(),
            host,
            slots: RefCell::new(SlotStore::new(check_order)),
            props: RefCell::new(props),
            pure: Cell::new(false),
            should_update: Cell::new(true),
            binding: RefCell::new(None),
            disposed: Cell::new(false),
            owner,
        })
    }

    /// An instance with no wrapper behind it. Update requests go nowhere.
    #[cfg(test)]
    pub(crate) fn detached(host: HostContext) -> Rc<Self> {
        let owner: Weak<dyn Refresh> = Weak::<Detached>::new();
        Self::new(host, owner, Value::Null)
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn host(&self) -> &HostContext {
        &self.host
    }

    pub fn props(&self) -> Value {
        self.props.borrow().clone()
    }

    pub(crate) fn set_props(&self, props: Value) -> Value {
        self.props.replace(props)
    }

    pub fn is_pure(&self) -> bool {
        self.pure.get()
    }

    /// Switch into purity mode for the rest of this instance's life.
    pub(crate) fn enter_purity(&self) {
        if !self.pure.replace(true) {
            tracing::debug!(component = %self.id, "entered purity mode");
        }
    }

    pub fn should_update(&self) -> bool {
        self.should_update.get()
    }

    pub(crate) fn set_should_update(&self, should_update: bool) {
        self.should_update.set(should_update);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.get()
    }

    /// Number of live hook slots.
    pub fn slot_count(&self) -> usize {
        self.slots.borrow().len()
    }

    pub(crate) fn begin_pass(&self) {
        self.slots.borrow_mut().reset_sequence();
    }

    pub(crate) fn end_pass(&self) {
        self.slots.borrow().finish_pass();
    }

    /// Resolve the next hook slot of the current pass.
    ///
    /// When the dependency key changed, the displaced record's disposer runs
    /// before this returns, so it always precedes the new record's setup.
    pub(crate) fn next_slot(&self, deps: Value, site: &'static Location<'static>) -> Rc<HookRecord> {
        let next = self.slots.borrow_mut().next_slot(deps, site);
        if let Some(replaced) = next.replaced {
            replaced.dispose();
        }
        next.record
    }

    /// Write a hook value. In purity mode a write that changes the value
    /// (under shallow equality) marks the current pass dirty.
    pub(crate) fn record_value(&self, record: &HookRecord, value: Value) {
        if self.pure.get() && !self.should_update.get() && !shallow_eq(&record.value(), &value) {
            self.should_update.set(true);
        }
        record.replace_value(value);
    }

    /// Ask the host to re-render this instance.
    pub(crate) fn request_update(&self) {
        if self.disposed.get() {
            tracing::warn!(component = %self.id, "update requested for an unmounted component");
            return;
        }
        self.host.scheduler().enqueue(self.id, self.owner.clone());
    }

    /// Current external state as seen by this instance, subscribing to the
    /// store on first use.
    pub(crate) fn store_state(self: &Rc<Self>) -> Result<Value> {
        if let Some(binding) = self.binding.borrow().as_ref() {
            return Ok(binding.state());
        }

        let store = self.host.store().cloned().ok_or(HookError::MissingStore)?;
        let binding = StoreBinding::subscribe(store, self);
        let state = binding.state();
        *self.binding.borrow_mut() = Some(binding);
        Ok(state)
    }

    pub fn is_subscribed(&self) -> bool {
        self.binding.borrow().is_some()
    }

    /// Tear down: dispose every slot in slot order, then drop the store
    /// subscription. A panicking disposer aborts the remaining teardown.
    pub(crate) fn dispose(&self) {
        if self.disposed.replace(true) {
            return;
        }

        let records = self.slots.borrow_mut().drain();
        for record in &records {
            record.dispose();
        }

        let binding = self.binding.borrow_mut().take();
        drop(binding);

        tracing::debug!(component = %self.id, slots = records.len(), "instance disposed");
    }
}

#[cfg(test)]
struct Detached;

#[cfg(test)]
impl Refresh for Detached {
    fn component_id(&self) -> ComponentId {
        ComponentId::default()
    }

    fn refresh(&self) -> Result<bool> {
        Ok(false)
    }
}

impl std::fmt::Debug for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Instance")
            .field("id", &self.id)
            .field("slots", &self.slot_count())
            .field("pure", &self.is_pure())
            .field("should_update", &self.should_update())
            .field("subscribed", &self.is_subscribed())
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

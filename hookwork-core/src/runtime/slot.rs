//! Hook Slot Store
//!
//! Each instance keeps an ordered list of hook records, addressed by the
//! order in which hooks are called during a render pass. The first hook call
//! of a pass gets slot 0, the second slot 1, and so on.
//!
//! # Addressing contract
//!
//! A render function must call the same hooks in the same order on every
//! pass. Calling a hook conditionally shifts every later slot by one, so a
//! hook would pick up another hook's cached value and disposer. The store
//! does not prevent this; with `check_hook_order` enabled it records the
//! source location of each call and warns when the sequence diverges.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::panic::Location;
use std::rc::Rc;

use crate::value::{deps_eq, Value};

/// Cleanup callback attached to a slot.
pub type Disposer = Box<dyn FnOnce()>;

/// Persistent storage for one hook call site.
pub struct HookRecord {
    /// Dependency key the record was created for.
    deps: Value,

    /// Last value exposed to the render function.
    value: RefCell<Value>,

    /// True only during the pass that created this record.
    fresh: Cell<bool>,

    disposer: RefCell<Option<Disposer>>,

    /// Hook-specific state that is not a `Value` (e.g. a state setter).
    handle: RefCell<Option<Rc<dyn Any>>>,

    /// Where the hook was called from.
    site: &'static Location<'static>,
}

impl HookRecord {
    fn new(deps: Value, site: &'static Location<'static>) -> Self {
        Self {
            deps,
            value: RefCell::new(Value::Null),
            fresh: Cell::new(true),
            disposer: RefCell::new(None),
            handle: RefCell::new(None),
            site,
        }
    }

    pub fn deps(&self) -> &Value {
        &self.deps
    }

    /// Whether this record was (re)created during the current pass. Cleared
    /// when the pass finishes.
    pub fn is_fresh(&self) -> bool {
        self.fresh.get()
    }

    pub fn value(&self) -> Value {
        self.value.borrow().clone()
    }

    pub fn site(&self) -> &'static Location<'static> {
        self.site
    }

    /// Store a new value and return the previous one.
    ///
    /// Hooks go through [`Instance::record_value`](super::Instance::record_value)
    /// so that purity mode sees the write.
    pub(crate) fn replace_value(&self, value: Value) -> Value {
        self.value.replace(value)
    }

    pub fn set_disposer(&self, dispose: impl FnOnce() + 'static) {
        *self.disposer.borrow_mut() = Some(Box::new(dispose));
    }

    pub fn has_disposer(&self) -> bool {
        self.disposer.borrow().is_some()
    }

    /// Fetch the hook-specific handle if it has type `T`.
    pub fn handle<T: Any>(&self) -> Option<Rc<T>> {
        let handle = self.handle.borrow().clone()?;
        handle.downcast::<T>().ok()
    }

    pub fn set_handle<T: Any>(&self, handle: Rc<T>) {
        *self.handle.borrow_mut() = Some(handle);
    }

    /// Run the disposer, if any. Runs at most once.
    pub(crate) fn dispose(&self) {
        let disposer = self.disposer.borrow_mut().take();
        if let Some(dispose) = disposer {
            dispose();
        }
    }
}

impl std::fmt::Debug for HookRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookRecord")
            .field("deps", &self.deps)
            .field("value", &*self.value.borrow())
            .field("fresh", &self.is_fresh())
            .field("has_disposer", &self.has_disposer())
            .field("site", &format_args!("{}", self.site))
            .finish()
    }
}

/// Result of advancing the slot cursor.
pub struct NextSlot {
    /// The record the hook should use.
    pub record: Rc<HookRecord>,

    /// A record that was displaced because its dependency key changed.
    /// The caller must dispose it before running the new record's setup.
    pub replaced: Option<Rc<HookRecord>>,
}

/// Ordered hook records of one instance.
#[derive(Debug, Default)]
pub struct SlotStore {
    records: Vec<Rc<HookRecord>>,
    cursor: usize,
    check_order: bool,
}

impl SlotStore {
    pub fn new(check_order: bool) -> Self {
        Self {
            records: Vec::new(),
            cursor: 0,
            check_order,
        }
    }

    /// Start a new render pass at slot 0.
    pub fn reset_sequence(&mut self) {
        self.cursor = 0;
    }

    /// Number of hook calls made so far in this pass.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Advance to the next slot, reusing its record when the dependency key
    /// is unchanged and replacing it otherwise.
    pub fn next_slot(&mut self, deps: Value, site: &'static Location<'static>) -> NextSlot {
        let index = self.cursor;
        self.cursor += 1;

        if let Some(existing) = self.records.get(index) {
            if self.check_order && existing.site != site {
                tracing::warn!(
                    slot = index,
                    previous = %existing.site,
                    current = %site,
                    "hook call order changed between renders"
                );
            }

            if deps_eq(&existing.deps, &deps) {
                existing.fresh.set(false);
                return NextSlot {
                    record: Rc::clone(existing),
                    replaced: None,
                };
            }
        }

        let record = Rc::new(HookRecord::new(deps, site));
        let replaced = if index < self.records.len() {
            Some(std::mem::replace(&mut self.records[index], Rc::clone(&record)))
        } else {
            self.records.push(Rc::clone(&record));
            None
        };

        NextSlot { record, replaced }
    }

    /// Close the pass: clear the fresh flags and report a pass that made
    /// fewer hook calls than there are slots.
    pub fn finish_pass(&self) {
        for record in &self.records {
            record.fresh.set(false);
        }

        if self.check_order && self.cursor < self.records.len() {
            tracing::warn!(
                called = self.cursor,
                slots = self.records.len(),
                "render pass skipped hooks that ran previously"
            );
        }
    }

    /// Remove every record, in slot order, so they can be disposed.
    pub fn drain(&mut self) -> Vec<Rc<HookRecord>> {
        self.cursor = 0;
        std::mem::take(&mut self.records)
    }
}

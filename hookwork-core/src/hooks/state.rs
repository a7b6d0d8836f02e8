//! State Hook
//!
//! `use_state` keeps a value across render passes and hands out a setter.
//! Setting a value that is identical to the current one does nothing; any
//! other write stores the value and schedules the component to re-render.

use std::cell::RefCell;
use std::panic::Location;
use std::rc::{Rc, Weak};

use crate::error::Result;
use crate::runtime::{Instance, RenderScope};
use crate::value::{same, Value};

/// Setter half of a state hook. Cheap to clone and safe to keep after the
/// component unmounts (it then does nothing).
#[derive(Clone)]
pub struct StateSetter {
    cell: Rc<RefCell<Value>>,
    owner: Weak<Instance>,
}

impl StateSetter {
    /// Current state value.
    pub fn get(&self) -> Value {
        self.cell.borrow().clone()
    }

    /// Replace the state with `value`.
    pub fn set(&self, value: impl Into<Value>) {
        let value = value.into();
        self.update(move |_| value);
    }

    /// Compute the next state from the current one.
    pub fn update(&self, next: impl FnOnce(&Value) -> Value) {
        let current = self.get();
        let next = next(&current);
        if same(&current, &next) {
            return;
        }

        *self.cell.borrow_mut() = next;

        match self.owner.upgrade() {
            Some(instance) => instance.request_update(),
            None => tracing::warn!("state set on a component that no longer exists"),
        }
    }
}

impl std::fmt::Debug for StateSetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateSetter")
            .field("value", &*self.cell.borrow())
            .finish()
    }
}

/// Hold a piece of state, initialized from `initial` on first render.
///
/// ```rust,ignore
/// let (count, set_count) = use_state(0)?;
/// set_count.update(|c| Value::from(c.as_int().unwrap_or(0) + 1));
/// ```
#[track_caller]
pub fn use_state(initial: impl Into<Value>) -> Result<(Value, StateSetter)> {
    state_hook(Location::caller(), move |_| initial.into())
}

/// Like [`use_state`], but the initial value is produced lazily.
#[track_caller]
pub fn use_state_with<F, T>(init: F) -> Result<(Value, StateSetter)>
where
    F: FnOnce() -> T,
    T: Into<Value>,
{
    state_hook(Location::caller(), move |_| init().into())
}

/// Like [`use_state_with`], but the producer receives the component's
/// current props.
#[track_caller]
pub fn use_state_from_props<F, T>(init: F) -> Result<(Value, StateSetter)>
where
    F: FnOnce(&Value) -> T,
    T: Into<Value>,
{
    state_hook(Location::caller(), move |props| init(props).into())
}

fn state_hook(
    site: &'static Location<'static>,
    init: impl FnOnce(&Value) -> Value,
) -> Result<(Value, StateSetter)> {
    let instance = RenderScope::current()?;
    let record = instance.next_slot(Value::Null, site);

    let setter = match record.handle::<StateSetter>() {
        Some(setter) => setter,
        None => {
            let setter = Rc::new(StateSetter {
                cell: Rc::new(RefCell::new(init(&instance.props()))),
                owner: Rc::downgrade(&instance),
            });
            record.set_handle(Rc::clone(&setter));
            setter
        }
    };

    let value = setter.get();
    instance.record_value(&record, value.clone());
    Ok((value, StateSetter::clone(&setter)))
}

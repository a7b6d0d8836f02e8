//! Store Hooks

use std::panic::Location;

use crate::error::{HookError, Result};
use crate::runtime::RenderScope;
use crate::store::Dispatch;
use crate::value::Value;

/// Select a value from the external store state.
///
/// The first call subscribes the component to the store. `select` runs on
/// every render pass; in purity mode a changed result marks the pass dirty.
/// Store changes re-render the component on their own, whatever its
/// ancestors decide.
#[track_caller]
pub fn use_selector<F, T>(select: F) -> Result<Value>
where
    F: FnOnce(&Value) -> T,
    T: Into<Value>,
{
    let instance = RenderScope::current()?;
    let state = instance.store_state()?;
    let record = instance.next_slot(Value::Null, Location::caller());

    let value = select(&state).into();
    instance.record_value(&record, value.clone());
    Ok(value)
}

/// The store's dispatch entry point. Does not use a hook slot.
pub fn use_dispatch() -> Result<Dispatch> {
    let instance = RenderScope::current()?;
    instance.host().dispatch().ok_or(HookError::MissingStore)
}

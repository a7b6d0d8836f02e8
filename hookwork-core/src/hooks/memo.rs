//! Memo and Disposable Hooks
//!
//! Both compute a value once per dependency key and return the cached value
//! until the key changes. The disposable variant also owns a cleanup
//! routine for the value it produced.

use std::panic::Location;

use crate::error::Result;
use crate::runtime::RenderScope;
use crate::value::Value;

/// Recompute `compute()` only when `deps` changes.
#[track_caller]
pub fn use_memo<F, T>(compute: F, deps: impl Into<Value>) -> Result<Value>
where
    F: FnOnce() -> T,
    T: Into<Value>,
{
    let instance = RenderScope::current()?;
    let record = instance.next_slot(deps.into(), Location::caller());

    if record.is_fresh() {
        instance.record_value(&record, compute().into());
    }

    Ok(record.value())
}

/// A value together with the routine that releases it.
pub struct Disposable {
    value: Value,
    dispose: Box<dyn FnOnce()>,
}

impl Disposable {
    pub fn new(value: impl Into<Value>, dispose: impl FnOnce() + 'static) -> Self {
        Self {
            value: value.into(),
            dispose: Box::new(dispose),
        }
    }
}

/// Like [`use_memo`], but `factory` also returns a disposer, which runs
/// when `deps` changes and when the component is torn down.
#[track_caller]
pub fn use_disposable<F>(factory: F, deps: impl Into<Value>) -> Result<Value>
where
    F: FnOnce() -> Disposable,
{
    let instance = RenderScope::current()?;
    let record = instance.next_slot(deps.into(), Location::caller());

    if record.is_fresh() {
        let Disposable { value, dispose } = factory();
        instance.record_value(&record, value);
        record.set_disposer(dispose);
    }

    Ok(record.value())
}

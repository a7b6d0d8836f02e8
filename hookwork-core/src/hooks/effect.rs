//! Effect Hook

use std::panic::Location;

use crate::error::Result;
use crate::runtime::RenderScope;
use crate::value::Value;

/// Run `effect` when the slot is first created and again whenever `deps`
/// changes. Pass `()` (or [`Value::Null`]) to run once per mount.
///
/// The effect runs synchronously during the render pass. If it returns a
/// cleanup closure, that closure runs before the next re-run and when the
/// component is torn down.
///
/// ```rust,ignore
/// use_effect(|| {
///     let id = timers.start();
///     Some(move || timers.stop(id))
/// }, Value::list([interval]))?;
/// ```
#[track_caller]
pub fn use_effect<F, D>(effect: F, deps: impl Into<Value>) -> Result<()>
where
    F: FnOnce() -> Option<D>,
    D: FnOnce() + 'static,
{
    let instance = RenderScope::current()?;
    let record = instance.next_slot(deps.into(), Location::caller());

    if record.is_fresh() {
        if let Some(cleanup) = effect() {
            record.set_disposer(cleanup);
        }
    }

    Ok(())
}

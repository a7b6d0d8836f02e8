//! Hookwork Core
//!
//! This crate lets stateless render functions keep local state, run side
//! effects, cache derived values and read from an external store, without
//! being rewritten as stateful components. It implements:
//!
//! - Hooks (`use_state`, `use_effect`, `use_memo`, `use_disposable`,
//!   `use_selector`, `use_dispatch`, `use_render_cache`)
//! - Per-component hook slot storage, addressed by call order
//! - A component wrapper the host mounts in place of the render function
//! - Purity mode: re-render only when props or hook values changed
//! - A store binding with a minimal reducer store
//!
//! # Architecture
//!
//! - `value`: dynamic values and the equality checker
//! - `runtime`: render context stack, slot store, hook instance, scheduler
//! - `hooks`: the hook functions
//! - `component`: the component adapter and wrapper
//! - `store`: the external store seam and `ReducerStore`
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use hookwork_core::{component, use_selector, HostContext, ReducerStore, Store, Value};
//!
//! let store = Rc::new(ReducerStore::new(
//!     |state, action| match action.as_str() {
//!         Some("increment") => Value::from(state.as_int().unwrap_or(0) + 1),
//!         _ => state.clone(),
//!     },
//!     0,
//! ));
//! let host = HostContext::new().with_store(store.clone());
//!
//! let counter = component(|_props: &Value, _host: &HostContext| {
//!     let count = use_selector(|state| state.clone())?;
//!     Ok(format!("Count is {count}"))
//! });
//!
//! let mounted = counter.instantiate(&host);
//! assert_eq!(mounted.mount(()).unwrap(), "Count is 0");
//!
//! store.dispatch(Value::from("increment"));
//! host.flush().unwrap();
//! assert_eq!(mounted.output().unwrap(), "Count is 1");
//! ```

pub mod component;
pub mod config;
pub mod error;
pub mod hooks;
pub mod runtime;
pub mod store;
pub mod value;

pub use component::{component, Component, HookComponent, RenderFn};
pub use config::RuntimeConfig;
pub use error::{HookError, Result};
pub use hooks::{
    use_disposable, use_dispatch, use_effect, use_memo, use_render_cache, use_selector,
    use_state, use_state_from_props, use_state_with, Disposable, RenderCache, StateSetter,
};
pub use runtime::{ComponentId, HostContext};
pub use store::{Dispatch, ReducerStore, Store};
pub use value::{Record, Value};

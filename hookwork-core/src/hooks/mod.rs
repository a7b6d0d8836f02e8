//! Hooks
//!
//! The functions a render function calls to hold state, run effects, cache
//! work and read from the external store. Every hook except
//! [`use_dispatch`] and [`use_render_cache`] occupies one slot of the
//! calling component, addressed by call order.
//!
//! # Rules
//!
//! - Hooks only work while a component is rendering. Outside a render they
//!   return [`HookError::NoActiveContext`](crate::HookError::NoActiveContext).
//! - Call the same hooks in the same order on every render. Do not call a
//!   hook inside a condition or a loop whose length changes.
//!
//! # Dependency keys
//!
//! `use_effect`, `use_memo` and `use_disposable` take a dependency key. The
//! slot is rebuilt whenever the key changes under
//! [`deps_eq`](crate::value::deps_eq). Usually the key is a list
//! (`Value::list([a, b])`); `()` means "never rebuild".
//!
//! # Example
//!
//! ```rust,ignore
//! let counter = component(|props: &Value, _host: &HostContext| {
//!     let (count, set_count) = use_state(0)?;
//!     let bucket = use_memo(|| expensive(&count), Value::list([count.as_int().unwrap_or(0) / 5]))?;
//!     use_effect(|| {
//!         tracing::info!("mounted");
//!         None::<fn()>
//!     }, ())?;
//!     Ok(format!("{} {}", count, bucket))
//! });
//! ```

mod effect;
mod memo;
mod render_cache;
mod selector;
mod state;

pub use effect::use_effect;
pub use memo::{use_disposable, use_memo, Disposable};
pub use render_cache::{use_render_cache, RenderCache};
pub use selector::{use_dispatch, use_selector};
pub use state::{use_state, use_state_from_props, use_state_with, StateSetter};

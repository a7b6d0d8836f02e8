//! Components
//!
//! The host-facing side of the runtime. A [`Component`] is a render
//! function ready to mount; a [`HookComponent`] is one mounted instance of
//! it, driven by the host through `should_update` / `render` and torn down
//! with `unmount`.

mod adapter;
mod wrapper;

pub use adapter::{component, Component, RenderFn};
pub use wrapper::HookComponent;

#[cfg(test)]
mod tests;

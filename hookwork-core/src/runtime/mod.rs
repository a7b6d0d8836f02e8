//! Hook Runtime
//!
//! The machinery behind the hooks: which component is rendering, where its
//! hook state lives, and how updates get back to the host.
//!
//! # Concepts
//!
//! ## Instances and slots
//!
//! Every mounted component owns an [`Instance`]. The instance keeps one
//! [`HookRecord`] per hook call site in a [`SlotStore`], addressed by call
//! order within a render pass. A record survives across passes as long as
//! its dependency key stays equal; otherwise it is disposed and replaced.
//!
//! ## Render context
//!
//! While a component renders, its instance sits on top of a thread-local
//! stack ([`RenderScope`]). Hooks look up the top of that stack. Nested
//! component renders push their own frame, so a child's hooks never touch
//! the parent's slots.
//!
//! ## Purity and dirtiness
//!
//! A component that asks for a render cache switches its instance into
//! purity mode. From then on every hook write is compared against the
//! previous value and any change marks the pass dirty; a pass that stays
//! clean tells the host not to re-render.
//!
//! ## Scheduling
//!
//! State setters and store listeners queue their component on the
//! [`Scheduler`] shared through the [`HostContext`]. The host flushes the
//! queue to re-render what changed.

mod binding;
mod context;
mod host;
mod id;
mod instance;
mod scheduler;
mod slot;

pub use binding::StoreBinding;
pub use context::RenderScope;
pub use host::HostContext;
pub use id::ComponentId;
pub use instance::Instance;
pub use scheduler::{Refresh, Scheduler};
pub use slot::{Disposer, HookRecord, NextSlot, SlotStore};

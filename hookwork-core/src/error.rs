//! Error types shared by hooks and the component wrapper.

use thiserror::Error;

use crate::runtime::ComponentId;

/// Errors raised by the hook runtime.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HookError {
    /// A hook was called while no component was rendering.
    #[error("no active render context: hooks can only be called while a component renders")]
    NoActiveContext,

    /// A store hook was called but the host context carries no store.
    #[error("no store in the host context")]
    MissingStore,

    /// A host operation reached a wrapper that was already unmounted.
    #[error("component {0} is unmounted")]
    Unmounted(ComponentId),

    /// The update queue kept refilling itself.
    #[error("updates did not settle after {0} flush rounds")]
    UpdateLoop(usize),

    /// A render function reported a failure of its own.
    #[error("render failed: {0}")]
    Render(String),
}

impl HookError {
    /// Convenience constructor for render functions.
    pub fn render(message: impl Into<String>) -> Self {
        HookError::Render(message.into())
    }
}

pub type Result<T, E = HookError> = std::result::Result<T, E>;

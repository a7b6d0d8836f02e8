//! Render Context
//!
//! The render context tracks which component instance is currently
//! rendering, so that a hook call can find the slot store it belongs to.
//!
//! # Implementation
//!
//! We use a thread-local stack of instances. Entering a render pushes the
//! instance; the returned guard pops it when dropped. A render function
//! that renders child components before returning pushes one frame per
//! level, and hooks always resolve against the top frame.
//!
//! Because the pop happens in `Drop`, the stack is restored when a render
//! function returns an error or panics, and a failing child never leaves
//! its frame on top of the parent's.

use std::cell::RefCell;
use std::rc::Rc;

use smallvec::SmallVec;

use super::{ComponentId, Instance};
use crate::error::{HookError, Result};

thread_local! {
    static CONTEXT_STACK: RefCell<SmallVec<[Rc<Instance>; 8]>> = RefCell::new(SmallVec::new());
}

/// Guard that pops the render context when dropped.
pub struct RenderScope {
    id: ComponentId,
}

impl RenderScope {
    /// Make `instance` the target of hook calls until the guard drops.
    pub fn enter(instance: Rc<Instance>) -> Self {
        let id = instance.id();
        CONTEXT_STACK.with(|stack| stack.borrow_mut().push(instance));
        Self { id }
    }

    /// Check if any component is rendering.
    pub fn is_active() -> bool {
        CONTEXT_STACK.with(|stack| !stack.borrow().is_empty())
    }

    /// Current nesting depth of render calls.
    pub fn depth() -> usize {
        CONTEXT_STACK.with(|stack| stack.borrow().len())
    }

    /// The instance whose hooks are being resolved.
    pub fn current() -> Result<Rc<Instance>> {
        CONTEXT_STACK
            .with(|stack| stack.borrow().last().cloned())
            .ok_or(HookError::NoActiveContext)
    }

    /// ID of the instance on top of the stack, if any.
    pub fn current_id() -> Option<ComponentId> {
        CONTEXT_STACK.with(|stack| stack.borrow().last().map(|instance| instance.id()))
    }
}

impl Drop for RenderScope {
    fn drop(&mut self) {
        CONTEXT_STACK.with(|stack| {
            let popped = stack.borrow_mut().pop();

            if let Some(instance) = popped {
                debug_assert_eq!(
                    instance.id(),
                    self.id,
                    "RenderScope mismatch: expected {}, got {}",
                    self.id,
                    instance.id()
                );
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::HostContext;

    fn instance() -> Rc<Instance> {
        Instance::detached(HostContext::new())
    }

    #[test]
    fn scope_tracks_instance() {
        let inst = instance();

        assert!(!RenderScope::is_active());
        assert!(RenderScope::current().is_err());

        {
            let _scope = RenderScope::enter(Rc::clone(&inst));
            assert!(RenderScope::is_active());
            assert_eq!(RenderScope::current_id(), Some(inst.id()));
        }

        assert!(!RenderScope::is_active());
        assert_eq!(RenderScope::current().err(), Some(HookError::NoActiveContext));
    }

    #[test]
    fn nested_scopes() {
        let outer = instance();
        let inner = instance();

        {
            let _outer = RenderScope::enter(Rc::clone(&outer));
            assert_eq!(RenderScope::current_id(), Some(outer.id()));

            {
                let _inner = RenderScope::enter(Rc::clone(&inner));
                assert_eq!(RenderScope::current_id(), Some(inner.id()));
                assert_eq!(RenderScope::depth(), 2);
            }

            assert_eq!(RenderScope::current_id(), Some(outer.id()));
        }

        assert!(RenderScope::current_id().is_none());
    }

    #[test]
    fn scope_is_restored_after_panic() {
        let outer = instance();
        let inner = instance();

        let _outer = RenderScope::enter(Rc::clone(&outer));
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _inner = RenderScope::enter(Rc::clone(&inner));
            panic!("child render failed");
        }));

        assert!(result.is_err());
        assert_eq!(RenderScope::current_id(), Some(outer.id()));
        assert_eq!(RenderScope::depth(), 1);
    }
}

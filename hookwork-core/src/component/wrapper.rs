//! Component Wrapper
//!
//! `HookComponent` is what the host mounts in place of a bare render
//! function. It owns the hook instance, runs render passes inside a render
//! scope, and answers the host's two questions: "should this subtree
//! update?" and "what is its output?".
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized --render--> Mounted --should_update--> Updating --render--> Mounted
//!                              |                         |
//!                              +---- unmount ----> Disposed <----+
//! ```
//!
//! `should_update` returning `false` leaves the wrapper `Mounted`; the host
//! keeps its previous tree and does not call `render`.
//!
//! # Purity mode
//!
//! Until the render function asks for a render cache, every update
//! re-renders. Afterwards, `should_update` runs the render pass itself,
//! seeded with whether the props changed, and lets hook writes mark it
//! dirty. A dirty pass keeps its output for the following `render` call; a
//! clean pass is thrown away.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::adapter::{Component, RenderFn};
use crate::error::{HookError, Result};
use crate::runtime::{ComponentId, HostContext, Instance, Refresh, RenderScope};
use crate::value::{shallow_eq, Value};

/// Where the wrapper is in its lifecycle.
enum Phase<V> {
    /// Created but never rendered.
    Uninitialized,

    /// Output is current.
    Mounted,

    /// The host was told to update. `prerendered` holds the output of a
    /// purity-mode pass that `render` hands out without running again.
    Updating { prerendered: Option<V> },

    Disposed,
}

impl<V> Phase<V> {
    fn name(&self) -> &'static str {
        match self {
            Phase::Uninitialized => "uninitialized",
            Phase::Mounted => "mounted",
            Phase::Updating { .. } => "updating",
            Phase::Disposed => "disposed",
        }
    }
}

/// Host-mountable wrapper around a render function.
pub struct HookComponent<V> {
    this: Weak<Self>,
    host: HostContext,
    render_fn: RefCell<RenderFn<V>>,
    instance: RefCell<Rc<Instance>>,
    phase: RefCell<Phase<V>>,
    output: RefCell<Option<V>>,
}

impl<V: Clone + 'static> HookComponent<V> {
    pub(crate) fn new(render_fn: RenderFn<V>, host: HostContext) -> Rc<Self> {
        Rc::new_cyclic(|this: &Weak<Self>| {
            let owner: Weak<dyn Refresh> = this.clone();
            let instance = Instance::new(host.clone(), owner, Value::Null);
            Self {
                this: this.clone(),
                host,
                render_fn: RefCell::new(render_fn),
                instance: RefCell::new(instance),
                phase: RefCell::new(Phase::Uninitialized),
                output: RefCell::new(None),
            }
        })
    }

    /// ID of the current hook instance.
    pub fn id(&self) -> ComponentId {
        self.instance.borrow().id()
    }

    pub fn host(&self) -> &HostContext {
        &self.host
    }

    /// Current hook instance.
    pub fn instance(&self) -> Rc<Instance> {
        Rc::clone(&self.instance.borrow())
    }

    pub fn is_pure(&self) -> bool {
        self.instance.borrow().is_pure()
    }

    pub fn is_mounted(&self) -> bool {
        matches!(
            *self.phase.borrow(),
            Phase::Mounted | Phase::Updating { .. }
        )
    }

    pub fn is_disposed(&self) -> bool {
        matches!(*self.phase.borrow(), Phase::Disposed)
    }

    pub fn props(&self) -> Value {
        self.instance.borrow().props()
    }

    /// Last output handed to the host.
    pub fn output(&self) -> Option<V> {
        self.output.borrow().clone()
    }

    /// First render with `props`. On an already mounted wrapper this is an
    /// update; when the update is skipped the current output is returned.
    pub fn mount(&self, props: impl Into<Value>) -> Result<V> {
        let props = props.into();
        let uninitialized = match *self.phase.borrow() {
            Phase::Disposed => return Err(HookError::Unmounted(self.id())),
            Phase::Uninitialized => true,
            Phase::Mounted | Phase::Updating { .. } => false,
        };

        if uninitialized {
            self.instance().set_props(props);
            return self.render();
        }

        match self.update(props)? {
            Some(output) => Ok(output),
            None => self.output().map_or_else(|| self.render(), Ok),
        }
    }

    /// Decide whether the host must re-render this subtree for `next_props`.
    ///
    /// Outside purity mode the answer is always yes and nothing runs yet.
    /// In purity mode the render pass runs now; its output is kept for
    /// [`render`](Self::render) when the answer is yes.
    pub fn should_update(&self, next_props: impl Into<Value>) -> Result<bool> {
        let next_props = next_props.into();
        let instance = self.instance();

        match *self.phase.borrow() {
            Phase::Disposed => return Err(HookError::Unmounted(instance.id())),
            Phase::Uninitialized => {
                instance.set_props(next_props);
                return Ok(true);
            }
            Phase::Mounted | Phase::Updating { .. } => {}
        }

        let previous = instance.set_props(next_props.clone());

        if !instance.is_pure() {
            *self.phase.borrow_mut() = Phase::Updating { prerendered: None };
            tracing::trace!(component = %instance.id(), "impure component always updates");
            return Ok(true);
        }

        instance.set_should_update(!shallow_eq(&previous, &next_props));
        let output = match self.run_pass(&instance) {
            Ok(output) => output,
            Err(err) => {
                instance.set_props(previous);
                *self.phase.borrow_mut() = Phase::Mounted;
                return Err(err);
            }
        };

        let should_update = instance.should_update();
        *self.phase.borrow_mut() = if should_update {
            Phase::Updating {
                prerendered: Some(output),
            }
        } else {
            Phase::Mounted
        };

        tracing::trace!(component = %instance.id(), should_update, "purity check");
        Ok(should_update)
    }

    /// Produce output for the host, reusing a pre-rendered pass if there is
    /// one.
    pub fn render(&self) -> Result<V> {
        let instance = self.instance();
        let phase = std::mem::replace(&mut *self.phase.borrow_mut(), Phase::Mounted);

        let output = match phase {
            Phase::Disposed => {
                *self.phase.borrow_mut() = Phase::Disposed;
                return Err(HookError::Unmounted(instance.id()));
            }
            Phase::Updating {
                prerendered: Some(output),
            } => output,
            Phase::Uninitialized => {
                tracing::debug!(component = %instance.id(), "mounting");
                instance.set_should_update(true);
                match self.run_pass(&instance) {
                    Ok(output) => output,
                    Err(err) => {
                        *self.phase.borrow_mut() = Phase::Uninitialized;
                        return Err(err);
                    }
                }
            }
            Phase::Mounted | Phase::Updating { prerendered: None } => {
                instance.set_should_update(true);
                self.run_pass(&instance)?
            }
        };

        *self.output.borrow_mut() = Some(output.clone());
        Ok(output)
    }

    /// Decide and render in one step. `None` means the host should keep the
    /// previous tree.
    pub fn update(&self, next_props: impl Into<Value>) -> Result<Option<V>> {
        if self.should_update(next_props)? {
            self.render().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Swap the render function at this position. A different function
    /// means a different component: every slot is disposed, the store
    /// subscription is dropped, and the next render mounts from scratch.
    /// Swapping in the same function does nothing.
    pub fn replace_component(&self, component: &Component<V>) -> Result<()> {
        if Rc::ptr_eq(&*self.render_fn.borrow(), component.render_fn()) {
            return Ok(());
        }
        if self.is_disposed() {
            return Err(HookError::Unmounted(self.id()));
        }

        let owner: Weak<dyn Refresh> = self.this.clone();
        let props = self.props();
        let fresh = Instance::new(self.host.clone(), owner, props);
        let old = self.instance.replace(fresh);

        tracing::debug!(old = %old.id(), new = %self.id(), "component identity reset");
        old.dispose();

        *self.render_fn.borrow_mut() = Rc::clone(component.render_fn());
        *self.phase.borrow_mut() = Phase::Uninitialized;
        *self.output.borrow_mut() = None;
        Ok(())
    }

    /// Tear down: run every slot's disposer in slot order and unsubscribe
    /// from the store. Unmounting twice is a no-op.
    pub fn unmount(&self) {
        let phase = std::mem::replace(&mut *self.phase.borrow_mut(), Phase::Disposed);
        if matches!(phase, Phase::Disposed) {
            return;
        }

        let instance = self.instance();
        tracing::debug!(component = %instance.id(), from = phase.name(), "unmounting");
        *self.output.borrow_mut() = None;
        instance.dispose();
    }

    fn run_pass(&self, instance: &Rc<Instance>) -> Result<V> {
        let render_fn = Rc::clone(&*self.render_fn.borrow());
        let props = instance.props();

        instance.begin_pass();
        let _scope = RenderScope::enter(Rc::clone(instance));
        tracing::trace!(component = %instance.id(), depth = RenderScope::depth(), "render pass");

        let output = render_fn(&props, &self.host)?;
        instance.end_pass();
        Ok(output)
    }
}

impl<V: Clone + 'static> Refresh for HookComponent<V> {
    fn component_id(&self) -> ComponentId {
        self.id()
    }

    fn refresh(&self) -> Result<bool> {
        if !self.is_mounted() {
            return Ok(false);
        }
        let props = self.props();
        Ok(self.update(props)?.is_some())
    }
}

impl<V> std::fmt::Debug for HookComponent<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookComponent")
            .field("instance", &*self.instance.borrow())
            .field("phase", &self.phase.borrow().name())
            .finish()
    }
}

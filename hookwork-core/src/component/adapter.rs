//! Component Adapter
//!
//! [`component`] turns a render function into a [`Component`], the unit a
//! host mounts. The component itself is only a shared handle to the render
//! function; each mount point gets its own [`HookComponent`] with its own
//! hook state.

use std::rc::Rc;

use super::HookComponent;
use crate::error::Result;
use crate::runtime::HostContext;
use crate::value::Value;

/// A render function: props and host context in, output out.
pub type RenderFn<V> = Rc<dyn Fn(&Value, &HostContext) -> Result<V>>;

/// A render function packaged for mounting.
///
/// Two `Component`s are the same component exactly when they share the
/// same render function; clones share it.
pub struct Component<V> {
    render_fn: RenderFn<V>,
}

/// Wrap `render` so a host can mount it.
///
/// ```rust,ignore
/// let hello = component(|props: &Value, _: &HostContext| {
///     let (count, _) = use_state(42)?;
///     Ok(format!("Hi {} {}", props.get("name").cloned().unwrap_or_default(), count))
/// });
/// let mounted = hello.instantiate(&HostContext::new());
/// assert_eq!(mounted.mount(json!({ "name": "George" }))?, "Hi George 42");
/// ```
pub fn component<V, F>(render: F) -> Component<V>
where
    F: Fn(&Value, &HostContext) -> Result<V> + 'static,
{
    Component {
        render_fn: Rc::new(render),
    }
}

impl<V: Clone + 'static> Component<V> {
    /// Create an unmounted wrapper for this component.
    pub fn instantiate(&self, host: &HostContext) -> Rc<HookComponent<V>> {
        HookComponent::new(Rc::clone(&self.render_fn), host.clone())
    }
}

impl<V> Component<V> {
    pub(crate) fn render_fn(&self) -> &RenderFn<V> {
        &self.render_fn
    }

    /// Whether `self` and `other` wrap the same render function.
    pub fn same_as(&self, other: &Component<V>) -> bool {
        Rc::ptr_eq(&self.render_fn, &other.render_fn)
    }
}

impl<V> Clone for Component<V> {
    fn clone(&self) -> Self {
        Self {
            render_fn: Rc::clone(&self.render_fn),
        }
    }
}

impl<V> std::fmt::Debug for Component<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Component")
            .field("render_fn", &Rc::as_ptr(&self.render_fn).cast::<()>())
            .finish()
    }
}

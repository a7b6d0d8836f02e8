//! Render Cache Hook

use std::rc::{Rc, Weak};

use crate::error::Result;
use crate::runtime::{Instance, RenderScope};

/// Probe telling a render function whether its output is needed.
#[derive(Clone, Debug)]
pub struct RenderCache {
    instance: Weak<Instance>,
}

impl RenderCache {
    /// True when this pass has been found not to need new output, so the
    /// render function may return a placeholder instead of building it.
    ///
    /// Call it after the hooks whose values feed the output; a hook that
    /// runs later can still flip the decision.
    pub fn is_cached(&self) -> bool {
        self.instance
            .upgrade()
            .is_some_and(|instance| !instance.should_update())
    }
}

/// Switch the calling component into purity mode and return its cache
/// probe. Purity mode lasts for the rest of the component's life; from then
/// on the host only re-renders it when its props or hook values change.
///
/// ```rust,ignore
/// let cache = use_render_cache()?;
/// let age = use_selector(|s| s.get("age").cloned())?;
/// if cache.is_cached() {
///     return Ok(Node::Cached);
/// }
/// ```
pub fn use_render_cache() -> Result<RenderCache> {
    let instance = RenderScope::current()?;
    instance.enter_purity();
    Ok(RenderCache {
        instance: Rc::downgrade(&instance),
    })
}

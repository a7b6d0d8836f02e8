//! Host Context
//!
//! What the host hands to every component it mounts: the external store
//! (if any), the update queue, and the runtime configuration. Render
//! functions receive it as their second argument, and child components are
//! instantiated with a clone of it.

use std::rc::Rc;

use super::Scheduler;
use crate::config::RuntimeConfig;
use crate::error::Result;
use crate::store::{Dispatch, Store};

/// Shared environment of a component tree. Cloning is cheap.
#[derive(Clone, Default)]
pub struct HostContext {
    store: Option<Rc<dyn Store>>,
    scheduler: Scheduler,
    config: Rc<RuntimeConfig>,
}

impl HostContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RuntimeConfig) -> Self {
        Self {
            config: Rc::new(config),
            ..Self::default()
        }
    }

    /// Provide `store` to every component mounted with this context.
    pub fn with_store(mut self, store: Rc<dyn Store>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn store(&self) -> Option<&Rc<dyn Store>> {
        self.store.as_ref()
    }

    /// Dispatch entry point of the store, if there is one.
    pub fn dispatch(&self) -> Option<Dispatch> {
        self.store.as_ref().map(|store| Dispatch::new(Rc::clone(store)))
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Run every pending update. See [`Scheduler::flush`].
    pub fn flush(&self) -> Result<usize> {
        self.scheduler.flush(self.config.max_flush_rounds)
    }
}

impl std::fmt::Debug for HostContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostContext")
            .field("has_store", &self.store.is_some())
            .field("scheduler", &self.scheduler)
            .field("config", &self.config)
            .finish()
    }
}

//! Update Scheduler
//!
//! State setters and store listeners never re-render on the spot. They
//! enqueue their component here, and the host drains the queue with
//! [`Scheduler::flush`], which re-runs each queued component with its
//! current props.
//!
//! # Algorithm
//!
//! 1. A component is queued at most once; repeated requests are coalesced.
//! 2. A flush takes the whole queue as one round and refreshes each entry
//!    in request order.
//! 3. Refreshes may queue more work (an effect setting state, a store
//!    dispatch from a render). That work forms the next round.
//! 4. Rounds repeat until the queue is empty, or fail with
//!    [`HookError::UpdateLoop`] after the configured limit.
//!
//! Queued entries hold weak references, so an unmounted and dropped
//! component simply falls out of the queue.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use super::ComponentId;
use crate::error::{HookError, Result};

/// Something the scheduler can re-render.
pub trait Refresh {
    /// The component currently behind this target.
    fn component_id(&self) -> ComponentId;

    /// Re-run the component with its current props.
    ///
    /// Returns whether new output was produced.
    fn refresh(&self) -> Result<bool>;
}

struct Pending {
    id: ComponentId,
    target: Weak<dyn Refresh>,
}

/// Shared queue of components waiting to re-render.
#[derive(Clone, Default)]
pub struct Scheduler {
    queue: Rc<RefCell<VecDeque<Pending>>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `target` for a refresh unless `id` is already queued.
    pub fn enqueue(&self, id: ComponentId, target: Weak<dyn Refresh>) {
        let mut queue = self.queue.borrow_mut();
        if queue.iter().any(|pending| pending.id == id) {
            return;
        }
        tracing::trace!(component = %id, "update scheduled");
        queue.push_back(Pending { id, target });
    }

    /// Number of queued components.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    pub fn is_scheduled(&self, id: ComponentId) -> bool {
        self.queue.borrow().iter().any(|pending| pending.id == id)
    }

    /// Drain the queue, refreshing every live component.
    ///
    /// Returns how many refreshes produced new output. On error the failed
    /// round's unprocessed entries stay queued ahead of any new requests.
    pub fn flush(&self, max_rounds: usize) -> Result<usize> {
        let mut rendered = 0;
        let mut rounds = 0;

        loop {
            let mut round = std::mem::take(&mut *self.queue.borrow_mut());
            if round.is_empty() {
                return Ok(rendered);
            }

            rounds += 1;
            if rounds > max_rounds {
                self.requeue_front(round);
                tracing::warn!(rounds = max_rounds, "update loop did not settle");
                return Err(HookError::UpdateLoop(max_rounds));
            }

            while let Some(pending) = round.pop_front() {
                let Some(target) = pending.target.upgrade() else {
                    continue;
                };
                // An identity reset replaces the instance behind the target.
                if target.component_id() != pending.id {
                    continue;
                }
                match target.refresh() {
                    Ok(true) => rendered += 1,
                    Ok(false) => {}
                    Err(err) => {
                        self.requeue_front(round);
                        return Err(err);
                    }
                }
            }
        }
    }

    fn requeue_front(&self, mut round: VecDeque<Pending>) {
        let mut queue = self.queue.borrow_mut();
        round.retain(|pending| !queue.iter().any(|queued| queued.id == pending.id));
        round.append(&mut queue);
        *queue = round;
    }
}

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("pending", &self.pending())
            .finish()
    }
}

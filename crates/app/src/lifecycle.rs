//! View-scoped loads.
//!
//! A page starts a load, then awaits the response. If the page navigated to
//! another customer in the meantime, or was unmounted, the late response must
//! not touch view state. [`ViewScope`] hands out a [`LoadTicket`] per load;
//! only the latest ticket of an open scope is accepted.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

#[derive(Debug, Default)]
struct ScopeState {
    generation: AtomicU64,
    closed: AtomicBool,
}

/// Lifetime of one mounted view.
///
/// Cheap to clone; clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct ViewScope {
    state: Arc<ScopeState>,
}

/// Proof that a load was started at a given point in the scope's life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl ViewScope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load, superseding any load still in flight.
    pub fn begin(&self) -> LoadTicket {
        let generation = self.state.generation.fetch_add(1, Ordering::SeqCst) + 1;
        LoadTicket { generation }
    }

    /// Whether a result obtained under `ticket` may still be applied.
    #[must_use]
    pub fn accepts(&self, ticket: LoadTicket) -> bool {
        !self.is_closed() && self.state.generation.load(Ordering::SeqCst) == ticket.generation
    }

    /// Mark the view as gone. Every outstanding ticket becomes stale.
    pub fn close(&self) {
        self.state.closed.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.closed.load(Ordering::SeqCst)
    }

    /// Run `load` under a fresh ticket.
    ///
    /// Returns `None` when the result arrived after the scope closed or after
    /// a newer load began.
    pub async fn run<F>(&self, load: F) -> Option<F::Output>
    where
        F: Future,
    {
        let ticket = self.begin();
        let output = load.await;
        if self.accepts(ticket) {
            Some(output)
        } else {
            tracing::debug!(
                generation = ticket.generation,
                closed = self.is_closed(),
                "discarding stale load result"
            );
            None
        }
    }
}

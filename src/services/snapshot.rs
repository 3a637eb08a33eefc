//! Latest-wins slot for asynchronously retrieved snapshots.
//!
//! Callers that fetch a fresh input snapshot out-of-band stamp each attempt
//! with a ticket; only the most recently begun attempt may install its
//! result. A slow retrieval that finishes after a newer one started is
//! discarded instead of clobbering the newer data.

use log::debug;
use parking_lot::RwLock;
use std::sync::Arc;

/// Ticket identifying one retrieval attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

struct SlotState<T> {
    generation: u64,
    value: Option<Arc<T>>,
}

/// Latest-wins cell holding the current snapshot, if any.
#[derive(Clone)]
pub struct SnapshotSlot<T> {
    state: Arc<RwLock<SlotState<T>>>,
}

impl<T> SnapshotSlot<T> {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(SlotState {
                generation: 0,
                value: None,
            })),
        }
    }

    /// Stamp a new retrieval attempt, superseding any still in flight.
    pub fn begin(&self) -> LoadTicket {
        let mut state = self.state.write();
        state.generation += 1;
        LoadTicket(state.generation)
    }

    /// Install the result of a retrieval.
    ///
    /// Returns `false` and drops the value when a later [`begin`] has
    /// superseded the ticket.
    ///
    /// [`begin`]: Self::begin
    pub fn install(&self, ticket: LoadTicket, value: T) -> bool {
        let mut state = self.state.write();
        if ticket.0 != state.generation {
            debug!(
                "Discarding superseded snapshot (ticket {}, current generation {})",
                ticket.0, state.generation
            );
            return false;
        }
        state.value = Some(Arc::new(value));
        true
    }

    /// The installed snapshot, shared.
    pub fn get(&self) -> Option<Arc<T>> {
        self.state.read().value.clone()
    }

    /// Drop the held snapshot. Outstanding tickets stay valid; the latest
    /// one may still install.
    pub fn clear(&self) {
        self.state.write().value = None;
    }
}

impl<T> Default for SnapshotSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

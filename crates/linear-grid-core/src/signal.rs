//! Signals carrying change notifications.
//!
//! A [`Signal`] is a list of callbacks ("slots") invoked synchronously, in
//! connection order, on the thread that calls [`Signal::emit`]. Adapters use
//! one to tell views their data set changed; the grid uses one to report
//! finished binds.
//!
//! Emission works on a snapshot of the connected slots, so a slot may connect
//! or disconnect slots (itself included) on the signal that is emitting.
//! Such changes take effect from the next emission.
//!
//! ```
//! use linear_grid_core::Signal;
//!
//! let rows_rebuilt = Signal::<usize>::new();
//! let id = rows_rebuilt.connect(|rows| assert_eq!(*rows, 3));
//!
//! assert_eq!(rows_rebuilt.emit(3), 1);
//! assert!(rows_rebuilt.disconnect(id));
//! assert_eq!(rows_rebuilt.emit(4), 0);
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// Handle to one connected slot, used to disconnect it.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A list of slots notified with a value of type `Args`.
///
/// `Signal<Args>` is `Send + Sync`; there is no queued delivery.
pub struct Signal<Args> {
    connections: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connection_count())
            .finish()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Connect a slot. The returned id disconnects it again.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = self.connections.lock().insert(Arc::new(slot));
        tracing::trace!(target: targets::SIGNAL, ?id, "connected slot");
        id
    }

    /// Disconnect a slot. Returns `false` if it was not connected.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        let removed = self.connections.lock().remove(id).is_some();
        tracing::trace!(target: targets::SIGNAL, ?id, removed, "disconnected slot");
        removed
    }

    /// Number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Invoke every connected slot with `args` and return how many ran.
    #[tracing::instrument(skip_all, target = "linear_grid_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) -> usize {
        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in &slots {
            slot(&args);
        }
        slots.len()
    }
}

//! Change listener registry.
//!
//! Shared by the plane and the viewport to fan out "something changed"
//! notifications. Callbacks run synchronously on the mutating thread, in
//! registration order.

use std::cell::{Cell, RefCell};
use std::fmt;
use uuid::Uuid;

use crate::types::ChangeCallback;

/// Handle returned when a listener is registered; used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(Uuid);

impl ListenerHandle {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ListenerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener({})", &self.0.to_string()[..8])
    }
}

/// Ordered set of change callbacks.
#[derive(Default)]
pub struct ChangeListeners {
    entries: RefCell<Vec<(ListenerHandle, ChangeCallback)>>,
    notifying: Cell<bool>,
}

impl ChangeListeners {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback and return its handle.
    pub fn add(&self, callback: ChangeCallback) -> ListenerHandle {
        let handle = ListenerHandle::new();
        self.entries.borrow_mut().push((handle, callback));
        tracing::debug!("Registered change listener {}", handle);
        handle
    }

    /// Remove a callback. Returns `false` when the handle was not registered.
    pub fn remove(&self, handle: ListenerHandle) -> bool {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|(h, _)| *h != handle);
        let removed = entries.len() != before;
        if removed {
            tracing::debug!("Removed change listener {}", handle);
        }
        removed
    }

    /// Invoke every registered callback once.
    ///
    /// Callbacks may add or remove listeners while running; the pass uses the
    /// set registered when it started. A notification raised from inside a
    /// callback is dropped, the outer pass already covers it.
    pub fn notify(&self) {
        if self.notifying.replace(true) {
            tracing::trace!("Suppressed re-entrant change notification");
            return;
        }
        let _pass = NotifyPass(&self.notifying);

        let snapshot: Vec<ChangeCallback> = self
            .entries
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();

        for callback in snapshot {
            callback();
        }
    }

    /// Number of registered callbacks
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// True when no callback is registered
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

/// Clears the in-progress flag when a pass ends, including by unwinding.
struct NotifyPass<'a>(&'a Cell<bool>);

impl Drop for NotifyPass<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl fmt::Debug for ChangeListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeListeners")
            .field("len", &self.len())
            .field("notifying", &self.notifying.get())
            .finish()
    }
}

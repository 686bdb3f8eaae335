use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use wallet_import_core::{KeyboardPort, KeyboardSignal, ListenerId, PlatformFamily, PortError};

/// Registry of keyboard listeners. The shell feeds platform signals in and
/// forwards them to whichever listeners observe that signal.
#[derive(Debug, Clone, Default)]
pub struct KeyboardHub {
    inner: Arc<Mutex<HubState>>,
}

#[derive(Debug, Default)]
struct HubState {
    next_id: u64,
    listeners: BTreeMap<ListenerId, PlatformFamily>,
    dismiss_requested: bool,
}

impl KeyboardHub {
    fn state(&self) -> MutexGuard<'_, HubState> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn listener_count(&self) -> usize {
        self.state().listeners.len()
    }

    /// Listeners that should receive `signal`.
    pub fn route(&self, signal: KeyboardSignal) -> Vec<ListenerId> {
        self.state()
            .listeners
            .iter()
            .filter(|(_, family)| signal.is_observed_by(**family))
            .map(|(id, _)| *id)
            .collect()
    }

    /// Returns and clears a pending dismiss request.
    pub fn take_dismiss(&self) -> bool {
        std::mem::take(&mut self.state().dismiss_requested)
    }
}

impl KeyboardPort for KeyboardHub {
    fn subscribe(&self, family: PlatformFamily) -> Result<ListenerId, PortError> {
        let mut state = self.state();
        state.next_id += 1;
        let id = ListenerId(state.next_id);
        state.listeners.insert(id, family);
        Ok(id)
    }

    fn unsubscribe(&self, id: ListenerId) {
        if self.state().listeners.remove(&id).is_none() {
            tracing::debug!(listener = id.0, "unsubscribe for unknown listener");
        }
    }

    fn dismiss(&self) {
        self.state().dismiss_requested = true;
    }
}

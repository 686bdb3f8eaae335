use std::sync::{Arc, Mutex, MutexGuard};

use wallet_import_core::ScreenHostPort;

/// Navigation stack for a shell that shows one screen at a time.
#[derive(Debug, Clone)]
pub struct NavigationStack {
    inner: Arc<Mutex<NavigationState>>,
}

#[derive(Debug)]
struct NavigationState {
    screens: Vec<String>,
    privacy_shield: bool,
}

impl NavigationStack {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(NavigationState {
                screens: vec![root.into()],
                privacy_shield: false,
            })),
        }
    }

    fn state(&self) -> MutexGuard<'_, NavigationState> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn push(&self, screen: impl Into<String>) {
        self.state().screens.push(screen.into());
    }

    pub fn top(&self) -> Option<String> {
        self.state().screens.last().cloned()
    }

    pub fn depth(&self) -> usize {
        self.state().screens.len()
    }

    pub fn privacy_shield(&self) -> bool {
        self.state().privacy_shield
    }
}

impl ScreenHostPort for NavigationStack {
    fn pop_screen(&self) {
        let mut state = self.state();
        // The root stays put.
        if state.screens.len() > 1 {
            let popped = state.screens.pop();
            tracing::debug!(?popped, "screen popped");
        }
    }

    fn set_privacy_shield(&self, enabled: bool) {
        self.state().privacy_shield = enabled;
    }
}

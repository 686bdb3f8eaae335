use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use wallet_import_core::FeedbackPort;

/// Collects alerts for the view to show and counts error haptics. Platforms
/// without a haptic engine surface the count as a visual pulse.
#[derive(Debug, Clone, Default)]
pub struct NoticeBoard {
    inner: Arc<Mutex<NoticeState>>,
}

#[derive(Debug, Default)]
struct NoticeState {
    alerts: VecDeque<String>,
    haptics: u64,
}

impl NoticeBoard {
    fn state(&self) -> MutexGuard<'_, NoticeState> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn current_alert(&self) -> Option<String> {
        self.state().alerts.front().cloned()
    }

    /// Acknowledges the alert on screen, revealing the next one.
    pub fn acknowledge(&self) -> Option<String> {
        self.state().alerts.pop_front()
    }

    pub fn pending_alerts(&self) -> usize {
        self.state().alerts.len()
    }

    pub fn haptics(&self) -> u64 {
        self.state().haptics
    }
}

impl FeedbackPort for NoticeBoard {
    fn notify_error(&self) {
        self.state().haptics += 1;
        tracing::debug!("error haptic");
    }

    fn alert(&self, message: &str) {
        tracing::info!(alert = message, "alert raised");
        self.state().alerts.push_back(message.to_owned());
    }
}

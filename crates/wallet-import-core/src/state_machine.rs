use thiserror::Error;

use crate::domain::PlatformFamily;
use crate::ports::{KeyboardPort, ListenerId, PortError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolbarState {
    #[default]
    Hidden,
    Visible,
}

impl ToolbarState {
    pub fn is_visible(self) -> bool {
        self == ToolbarState::Visible
    }
}

/// Raw keyboard notifications as the platform names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardSignal {
    WillShow,
    DidShow,
    WillHide,
    DidHide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardEdge {
    Show,
    Hide,
}

impl KeyboardSignal {
    pub fn edge(self) -> KeyboardEdge {
        match self {
            KeyboardSignal::WillShow | KeyboardSignal::DidShow => KeyboardEdge::Show,
            KeyboardSignal::WillHide | KeyboardSignal::DidHide => KeyboardEdge::Hide,
        }
    }

    /// URI-prefixed platforms announce the keyboard before it appears,
    /// bare-path platforms after.
    pub fn is_observed_by(self, family: PlatformFamily) -> bool {
        match family {
            PlatformFamily::UriPrefixed => {
                matches!(self, KeyboardSignal::WillShow | KeyboardSignal::WillHide)
            }
            PlatformFamily::BarePath => {
                matches!(self, KeyboardSignal::DidShow | KeyboardSignal::DidHide)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateTransition {
    pub from: ToolbarState,
    pub to: ToolbarState,
    pub reason: &'static str,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("redundant toolbar transition: {edge:?} while {state:?}")]
    Redundant {
        state: ToolbarState,
        edge: KeyboardEdge,
    },
}

pub fn toolbar_transition(
    state: ToolbarState,
    edge: KeyboardEdge,
) -> Result<StateTransition, TransitionError> {
    match (state, edge) {
        (ToolbarState::Hidden, KeyboardEdge::Show) => Ok(StateTransition {
            from: ToolbarState::Hidden,
            to: ToolbarState::Visible,
            reason: "keyboard_shown",
        }),
        (ToolbarState::Visible, KeyboardEdge::Hide) => Ok(StateTransition {
            from: ToolbarState::Visible,
            to: ToolbarState::Hidden,
            reason: "keyboard_hidden",
        }),
        (state, edge) => Err(TransitionError::Redundant { state, edge }),
    }
}

/// A registered keyboard listener. Dropping it releases the listener.
pub struct KeyboardSubscription<K: KeyboardPort> {
    port: K,
    id: ListenerId,
    family: PlatformFamily,
}

impl<K: KeyboardPort> KeyboardSubscription<K> {
    pub fn acquire(port: K, family: PlatformFamily) -> Result<Self, PortError> {
        let id = port.subscribe(family)?;
        tracing::debug!(listener = id.0, ?family, "keyboard listener registered");
        Ok(Self { port, id, family })
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn accepts(&self, id: ListenerId, signal: KeyboardSignal) -> bool {
        self.id == id && signal.is_observed_by(self.family)
    }
}

impl<K: KeyboardPort> Drop for KeyboardSubscription<K> {
    fn drop(&mut self) {
        self.port.unsubscribe(self.id);
        tracing::debug!(listener = self.id.0, "keyboard listener released");
    }
}

/// Folds keyboard signals into toolbar visibility. Starts hidden.
#[derive(Debug, Default)]
pub struct KeyboardTracker {
    state: ToolbarState,
    history: Vec<StateTransition>,
}

impl KeyboardTracker {
    pub fn state(&self) -> ToolbarState {
        self.state
    }

    pub fn history(&self) -> &[StateTransition] {
        &self.history
    }

    pub fn apply(&mut self, edge: KeyboardEdge) -> Option<&StateTransition> {
        match toolbar_transition(self.state, edge) {
            Ok(transition) => {
                self.state = transition.to;
                self.history.push(transition);
                self.history.last()
            }
            Err(err) => {
                tracing::trace!(%err, "ignoring keyboard signal");
                None
            }
        }
    }

    pub fn reset(&mut self) {
        self.state = ToolbarState::Hidden;
        self.history.clear();
    }
}

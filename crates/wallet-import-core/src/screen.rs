use std::collections::BTreeSet;

use crate::domain::{
    Acquisition, AcquisitionTicket, AdditionalProperties, Capabilities, ChannelChoice,
    ImageSource, ImportCandidate, ScreenStatus,
};
use crate::ports::{
    ClipboardPort, FeedbackPort, ImportProcessorPort, KeyboardPort, ListenerId, PortError,
    ScreenHostPort,
};
use crate::selector::{build_channel_menu, route, ChannelMenu, ChannelRoute, ClipboardEmptiness};
use crate::state_machine::{
    KeyboardSignal, KeyboardSubscription, KeyboardTracker, StateTransition, ToolbarState,
};

pub const SCREEN_TITLE: &str = "Import wallet";
pub const IMPORT_ERROR_MESSAGE: &str =
    "Failed to import. Please, make sure that the provided data is valid.";
pub const NO_QR_CODE_MESSAGE: &str = "The selected image does not contain a QR Code.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Accepted,
    Rejected,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Ignored,
    Cancelled,
    Acquire(AcquisitionTicket),
    Dispatched(DispatchOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionApplied {
    Stale,
    Aborted,
    NoCode,
    Dispatched(DispatchOutcome),
}

#[derive(Debug, Clone)]
pub enum ScreenCommand {
    Mount,
    Unmount,
    EditText(String),
    Submit,
    Scan,
    Choose(ChannelChoice),
    CompleteAcquisition {
        ticket: AcquisitionTicket,
        acquisition: Acquisition,
    },
    Scanned {
        text: String,
        extra: Option<AdditionalProperties>,
    },
    Keyboard {
        listener: ListenerId,
        signal: KeyboardSignal,
    },
    ToolbarClear,
    ToolbarPaste(String),
    ToolbarDone,
}

#[derive(Debug, Clone, Default)]
pub struct CommandResult {
    pub dispatch: Option<DispatchOutcome>,
    pub menu: Option<ChannelMenu>,
    pub selection: Option<Selection>,
    pub applied: Option<AcquisitionApplied>,
    pub transition: Option<StateTransition>,
}

impl CommandResult {
    fn empty() -> Self {
        Self::default()
    }
}

/// Controller behind the import screen: owns the field text, converges every
/// input channel on one dispatch path and tracks the keyboard toolbar.
pub struct ImportScreen<P, H, C, F, K>
where
    P: ImportProcessorPort,
    H: ScreenHostPort,
    C: ClipboardPort,
    F: FeedbackPort,
    K: KeyboardPort + Clone,
{
    pub processor: P,
    pub host: H,
    pub clipboard: C,
    pub feedback: F,
    pub keyboard: K,
    capabilities: Capabilities,
    emptiness: ClipboardEmptiness,
    import_text: String,
    status: ScreenStatus,
    mounted: bool,
    epoch: u64,
    next_ticket: u64,
    pending: BTreeSet<u64>,
    pending_menu: Option<ChannelMenu>,
    tracker: KeyboardTracker,
    subscription: Option<KeyboardSubscription<K>>,
}

impl<P, H, C, F, K> ImportScreen<P, H, C, F, K>
where
    P: ImportProcessorPort,
    H: ScreenHostPort,
    C: ClipboardPort,
    F: FeedbackPort,
    K: KeyboardPort + Clone,
{
    pub fn new(
        processor: P,
        host: H,
        clipboard: C,
        feedback: F,
        keyboard: K,
        capabilities: Capabilities,
        emptiness: ClipboardEmptiness,
    ) -> Self {
        Self {
            processor,
            host,
            clipboard,
            feedback,
            keyboard,
            capabilities,
            emptiness,
            import_text: String::new(),
            status: ScreenStatus::Editing,
            mounted: false,
            epoch: 0,
            next_ticket: 0,
            pending: BTreeSet::new(),
            pending_menu: None,
            tracker: KeyboardTracker::default(),
            subscription: None,
        }
    }

    /// Pre-fills the field, e.g. from a navigation parameter.
    pub fn with_initial_text(mut self, text: impl Into<String>) -> Self {
        self.import_text = text.into();
        self
    }

    pub fn title(&self) -> &'static str {
        SCREEN_TITLE
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn status(&self) -> ScreenStatus {
        self.status
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn import_text(&self) -> &str {
        &self.import_text
    }

    pub fn set_import_text(&mut self, text: impl Into<String>) {
        self.import_text = text.into();
    }

    pub fn pending_menu(&self) -> Option<&ChannelMenu> {
        self.pending_menu.as_ref()
    }

    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    pub fn keyboard_listener(&self) -> Option<ListenerId> {
        self.subscription.as_ref().map(KeyboardSubscription::id)
    }

    pub fn toolbar_state(&self) -> ToolbarState {
        self.tracker.state()
    }

    pub fn toolbar_history(&self) -> &[StateTransition] {
        self.tracker.history()
    }

    pub fn mount(&mut self) -> Result<(), PortError> {
        if self.mounted {
            return Ok(());
        }
        if !self.capabilities.has_native_accessory {
            self.subscription = Some(KeyboardSubscription::acquire(
                self.keyboard.clone(),
                self.capabilities.family,
            )?);
        }
        self.host.set_privacy_shield(true);
        self.tracker.reset();
        self.mounted = true;
        tracing::debug!(epoch = self.epoch, "import screen mounted");
        Ok(())
    }

    /// Releases listeners and invalidates every outstanding ticket.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.subscription = None;
        self.host.set_privacy_shield(false);
        self.mounted = false;
        self.epoch = self.epoch.wrapping_add(1);
        if !self.pending.is_empty() {
            tracing::debug!(dropped = self.pending.len(), "unmounted with acquisitions in flight");
        }
        self.pending.clear();
        self.pending_menu = None;
        self.tracker.reset();
    }

    pub fn can_submit(&self) -> bool {
        self.status == ScreenStatus::Editing && !self.import_text.trim().is_empty()
    }

    /// The manual "Import" action. Blank text leaves the control disabled.
    pub fn submit(&mut self) -> DispatchOutcome {
        if !self.can_submit() {
            return DispatchOutcome::Skipped;
        }
        let candidate = ImportCandidate::new(self.import_text.clone(), None);
        self.dispatch_candidate(&candidate)
    }

    pub fn dispatch(&mut self, text: &str, extra: Option<&AdditionalProperties>) -> DispatchOutcome {
        let candidate = ImportCandidate::new(text, extra.cloned());
        self.dispatch_candidate(&candidate)
    }

    fn dispatch_candidate(&mut self, candidate: &ImportCandidate) -> DispatchOutcome {
        if self.status == ScreenStatus::Dismissed {
            tracing::debug!("dispatch after dismissal ignored");
            return DispatchOutcome::Skipped;
        }
        match self
            .processor
            .process(&candidate.text, candidate.extra.as_ref())
        {
            Ok(()) => {
                tracing::info!(?candidate, "import accepted");
                self.status = ScreenStatus::Dismissed;
                self.pending_menu = None;
                self.host.pop_screen();
                DispatchOutcome::Accepted
            }
            Err(err) => {
                tracing::warn!(?candidate, %err, "import rejected");
                self.feedback.alert(IMPORT_ERROR_MESSAGE);
                self.feedback.notify_error();
                DispatchOutcome::Rejected
            }
        }
    }

    /// Shows the acquired value in the field, then dispatches it.
    pub fn on_scanned(
        &mut self,
        text: impl Into<String>,
        extra: Option<AdditionalProperties>,
    ) -> DispatchOutcome {
        if self.status == ScreenStatus::Dismissed {
            return DispatchOutcome::Skipped;
        }
        self.import_text = text.into();
        let candidate = ImportCandidate::new(self.import_text.clone(), extra);
        self.dispatch_candidate(&candidate)
    }

    fn read_clipboard(&self) -> String {
        self.clipboard.read_text().unwrap_or_else(|err| {
            tracing::warn!(%err, "clipboard read failed, treating as empty");
            String::new()
        })
    }

    /// The "scan" action: builds the channel list for this platform.
    pub fn present_selector(&mut self) -> Option<ChannelMenu> {
        if self.status == ScreenStatus::Dismissed {
            return None;
        }
        let clipboard = self.read_clipboard();
        let menu = build_channel_menu(&clipboard, &self.capabilities, self.emptiness);
        tracing::debug!(
            presentation = ?menu.presentation,
            options = menu.options.len(),
            "channel selector presented"
        );
        self.pending_menu = Some(menu.clone());
        Some(menu)
    }

    /// Resolves the open selector. Each presentation routes at most once.
    pub fn choose(&mut self, choice: ChannelChoice) -> Selection {
        let Some(menu) = self.pending_menu.take() else {
            return Selection::Ignored;
        };
        if !menu.offers(choice) {
            tracing::debug!(?choice, "choice not offered");
            return Selection::Ignored;
        }
        match route(choice) {
            ChannelRoute::Nothing => Selection::Cancelled,
            ChannelRoute::Acquire(source) => Selection::Acquire(self.begin_acquisition(source)),
            ChannelRoute::Clipboard => {
                let text = self.read_clipboard();
                Selection::Dispatched(self.on_scanned(text, None))
            }
        }
    }

    pub fn begin_acquisition(&mut self, source: ImageSource) -> AcquisitionTicket {
        self.next_ticket = self.next_ticket.wrapping_add(1);
        let ticket = AcquisitionTicket {
            epoch: self.epoch,
            id: self.next_ticket,
            source,
        };
        self.pending.insert(ticket.id);
        tracing::debug!(?ticket, "acquisition started");
        ticket
    }

    /// Applies a finished acquisition. Results for an unmounted screen, a
    /// previous mount or an already-settled ticket are dropped untouched.
    pub fn complete_acquisition(
        &mut self,
        ticket: AcquisitionTicket,
        acquisition: Acquisition,
    ) -> AcquisitionApplied {
        if !self.mounted || ticket.epoch != self.epoch || !self.pending.remove(&ticket.id) {
            tracing::debug!(?ticket, "stale acquisition dropped");
            return AcquisitionApplied::Stale;
        }
        if self.status == ScreenStatus::Dismissed {
            return AcquisitionApplied::Stale;
        }
        match acquisition {
            Acquisition::Aborted => AcquisitionApplied::Aborted,
            Acquisition::NoCode => {
                self.feedback.alert(NO_QR_CODE_MESSAGE);
                AcquisitionApplied::NoCode
            }
            Acquisition::Decoded(text) => {
                AcquisitionApplied::Dispatched(self.on_scanned(text, None))
            }
        }
    }

    pub fn on_keyboard_signal(
        &mut self,
        listener: ListenerId,
        signal: KeyboardSignal,
    ) -> Option<StateTransition> {
        let accepted = self
            .subscription
            .as_ref()
            .is_some_and(|sub| sub.accepts(listener, signal));
        if !accepted {
            return None;
        }
        self.tracker.apply(signal.edge()).cloned()
    }

    pub fn toolbar_visible(&self, field_focused: bool) -> bool {
        if !self.mounted {
            return false;
        }
        if self.capabilities.has_native_accessory {
            field_focused
        } else {
            self.tracker.state().is_visible()
        }
    }

    pub fn toolbar_clear(&mut self) {
        self.import_text.clear();
        self.keyboard.dismiss();
    }

    pub fn toolbar_paste(&mut self, text: impl Into<String>) {
        self.import_text = text.into();
        self.keyboard.dismiss();
    }

    pub fn toolbar_done(&mut self) {
        self.keyboard.dismiss();
    }

    pub fn handle(&mut self, command: ScreenCommand) -> Result<CommandResult, PortError> {
        let mut result = CommandResult::empty();
        match command {
            ScreenCommand::Mount => self.mount()?,
            ScreenCommand::Unmount => self.unmount(),
            ScreenCommand::EditText(text) => self.set_import_text(text),
            ScreenCommand::Submit => result.dispatch = Some(self.submit()),
            ScreenCommand::Scan => result.menu = self.present_selector(),
            ScreenCommand::Choose(choice) => {
                let selection = self.choose(choice);
                if let Selection::Dispatched(outcome) = selection {
                    result.dispatch = Some(outcome);
                }
                result.selection = Some(selection);
            }
            ScreenCommand::CompleteAcquisition {
                ticket,
                acquisition,
            } => {
                let applied = self.complete_acquisition(ticket, acquisition);
                if let AcquisitionApplied::Dispatched(outcome) = applied {
                    result.dispatch = Some(outcome);
                }
                result.applied = Some(applied);
            }
            ScreenCommand::Scanned { text, extra } => {
                result.dispatch = Some(self.on_scanned(text, extra));
            }
            ScreenCommand::Keyboard { listener, signal } => {
                result.transition = self.on_keyboard_signal(listener, signal);
            }
            ScreenCommand::ToolbarClear => self.toolbar_clear(),
            ScreenCommand::ToolbarPaste(text) => self.toolbar_paste(text),
            ScreenCommand::ToolbarDone => self.toolbar_done(),
        }
        Ok(result)
    }
}

impl<P, H, C, F, K> Drop for ImportScreen<P, H, C, F, K>
where
    P: ImportProcessorPort,
    H: ScreenHostPort,
    C: ClipboardPort,
    F: FeedbackPort,
    K: KeyboardPort + Clone,
{
    fn drop(&mut self) {
        self.unmount();
    }
}

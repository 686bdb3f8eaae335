#![allow(dead_code)]

use std::collections::{BTreeSet, VecDeque};
use std::sync::{Arc, Mutex};

use wallet_import_core::{
    AdditionalProperties, Capabilities, ClipboardEmptiness, ClipboardPort, DecodeResult,
    FeedbackPort, ImagePickerPort, ImageSource, ImportError, ImportProcessorPort, ImportScreen,
    KeyboardPort, ListenerId, PickedImage, PickerOutcome, PlatformFamily, PortError,
    QrDecoderPort, ScreenHostPort,
};

#[derive(Debug, Default)]
pub struct RecordingProcessor {
    calls: Mutex<Vec<(String, Option<AdditionalProperties>)>>,
    reject: Mutex<bool>,
}

impl RecordingProcessor {
    pub fn rejecting() -> Self {
        Self {
            reject: Mutex::new(true),
            ..Self::default()
        }
    }

    pub fn set_rejecting(&self, reject: bool) {
        *self.reject.lock().expect("reject lock") = reject;
    }

    pub fn calls(&self) -> Vec<(String, Option<AdditionalProperties>)> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.calls().into_iter().map(|(text, _)| text).collect()
    }
}

impl ImportProcessorPort for RecordingProcessor {
    fn process(&self, text: &str, extra: Option<&AdditionalProperties>) -> Result<(), ImportError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push((text.to_owned(), extra.cloned()));
        if *self.reject.lock().expect("reject lock") {
            return Err(ImportError::Rejected("unrecognized".to_owned()));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RecordingHost {
    pops: Mutex<usize>,
    shield: Mutex<Vec<bool>>,
}

impl RecordingHost {
    pub fn pops(&self) -> usize {
        *self.pops.lock().expect("pops lock")
    }

    pub fn shield_history(&self) -> Vec<bool> {
        self.shield.lock().expect("shield lock").clone()
    }
}

impl ScreenHostPort for RecordingHost {
    fn pop_screen(&self) {
        *self.pops.lock().expect("pops lock") += 1;
    }

    fn set_privacy_shield(&self, enabled: bool) {
        self.shield.lock().expect("shield lock").push(enabled);
    }
}

#[derive(Debug, Default)]
pub struct FakeClipboard {
    text: Mutex<Option<String>>,
}

impl FakeClipboard {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: Mutex::new(Some(text.to_owned())),
        }
    }

    pub fn set(&self, text: Option<&str>) {
        *self.text.lock().expect("clipboard lock") = text.map(ToOwned::to_owned);
    }
}

impl ClipboardPort for FakeClipboard {
    fn read_text(&self) -> Result<String, PortError> {
        self.text
            .lock()
            .expect("clipboard lock")
            .clone()
            .ok_or_else(|| PortError::Unavailable("clipboard offline".to_owned()))
    }
}

#[derive(Debug, Default)]
pub struct RecordingFeedback {
    alerts: Mutex<Vec<String>>,
    haptics: Mutex<usize>,
}

impl RecordingFeedback {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().expect("alerts lock").clone()
    }

    pub fn haptics(&self) -> usize {
        *self.haptics.lock().expect("haptics lock")
    }
}

impl FeedbackPort for RecordingFeedback {
    fn notify_error(&self) {
        *self.haptics.lock().expect("haptics lock") += 1;
    }

    fn alert(&self, message: &str) {
        self.alerts
            .lock()
            .expect("alerts lock")
            .push(message.to_owned());
    }
}

#[derive(Debug, Default)]
struct KeyboardInner {
    next: u64,
    live: BTreeSet<u64>,
    released: Vec<u64>,
    dismissals: usize,
}

#[derive(Debug, Clone, Default)]
pub struct FakeKeyboard {
    inner: Arc<Mutex<KeyboardInner>>,
}

impl FakeKeyboard {
    pub fn live(&self) -> Vec<u64> {
        self.inner
            .lock()
            .expect("keyboard lock")
            .live
            .iter()
            .copied()
            .collect()
    }

    pub fn released(&self) -> Vec<u64> {
        self.inner.lock().expect("keyboard lock").released.clone()
    }

    pub fn dismissals(&self) -> usize {
        self.inner.lock().expect("keyboard lock").dismissals
    }
}

impl KeyboardPort for FakeKeyboard {
    fn subscribe(&self, _family: PlatformFamily) -> Result<ListenerId, PortError> {
        let mut inner = self.inner.lock().expect("keyboard lock");
        inner.next += 1;
        let id = inner.next;
        inner.live.insert(id);
        Ok(ListenerId(id))
    }

    fn unsubscribe(&self, id: ListenerId) {
        let mut inner = self.inner.lock().expect("keyboard lock");
        inner.live.remove(&id.0);
        inner.released.push(id.0);
    }

    fn dismiss(&self) {
        self.inner.lock().expect("keyboard lock").dismissals += 1;
    }
}

/// Picker replaying a scripted list of outcomes.
#[derive(Debug, Default)]
pub struct ScriptedPicker {
    outcomes: Mutex<VecDeque<PickerOutcome>>,
    opened: Mutex<Vec<ImageSource>>,
}

impl ScriptedPicker {
    pub fn picking(path: &str) -> Self {
        let picker = Self::default();
        picker.push(PickerOutcome::Picked(PickedImage {
            path: path.to_owned(),
        }));
        picker
    }

    pub fn aborting() -> Self {
        let picker = Self::default();
        picker.push(PickerOutcome::Aborted);
        picker
    }

    pub fn push(&self, outcome: PickerOutcome) {
        self.outcomes.lock().expect("picker lock").push_back(outcome);
    }

    pub fn opened(&self) -> Vec<ImageSource> {
        self.opened.lock().expect("picker lock").clone()
    }
}

impl ImagePickerPort for ScriptedPicker {
    fn open(&self, source: ImageSource) -> Result<PickerOutcome, PortError> {
        self.opened.lock().expect("picker lock").push(source);
        Ok(self
            .outcomes
            .lock()
            .expect("picker lock")
            .pop_front()
            .unwrap_or(PickerOutcome::Aborted))
    }
}

/// Decoder answering with a fixed result and remembering requested paths.
#[derive(Debug)]
pub struct FixedDecoder {
    result: Result<DecodeResult, String>,
    paths: Mutex<Vec<String>>,
}

impl FixedDecoder {
    pub fn decoding(text: &str) -> Self {
        Self {
            result: Ok(DecodeResult::Decoded(text.to_owned())),
            paths: Mutex::new(Vec::new()),
        }
    }

    pub fn no_code() -> Self {
        Self {
            result: Ok(DecodeResult::NoCode),
            paths: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_owned()),
            paths: Mutex::new(Vec::new()),
        }
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().expect("paths lock").clone()
    }
}

impl QrDecoderPort for FixedDecoder {
    fn decode(&self, path: &str) -> Result<DecodeResult, PortError> {
        self.paths.lock().expect("paths lock").push(path.to_owned());
        self.result.clone().map_err(PortError::Io)
    }
}

pub type TestScreen =
    ImportScreen<RecordingProcessor, RecordingHost, FakeClipboard, RecordingFeedback, FakeKeyboard>;

pub fn action_sheet_platform() -> Capabilities {
    Capabilities {
        family: PlatformFamily::UriPrefixed,
        has_native_accessory: true,
        has_action_sheet: true,
    }
}

pub fn toolbar_platform() -> Capabilities {
    Capabilities {
        family: PlatformFamily::BarePath,
        has_native_accessory: false,
        has_action_sheet: false,
    }
}

pub fn new_screen(capabilities: Capabilities, clipboard: FakeClipboard) -> TestScreen {
    new_screen_with(RecordingProcessor::default(), capabilities, clipboard)
}

pub fn new_screen_with(
    processor: RecordingProcessor,
    capabilities: Capabilities,
    clipboard: FakeClipboard,
) -> TestScreen {
    let mut screen = ImportScreen::new(
        processor,
        RecordingHost::default(),
        clipboard,
        RecordingFeedback::default(),
        FakeKeyboard::default(),
        capabilities,
        ClipboardEmptiness::default(),
    );
    screen.mount().expect("mount screen");
    screen
}

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Key under which watch-only imports carry the master fingerprint.
pub const MASTER_FINGERPRINT_KEY: &str = "masterFingerprint";

/// Side-channel key/value pairs forwarded next to the import text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdditionalProperties(pub BTreeMap<String, String>);

impl AdditionalProperties {
    pub fn with_master_fingerprint(fingerprint: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(MASTER_FINGERPRINT_KEY.to_owned(), fingerprint.into());
        Self(map)
    }

    pub fn master_fingerprint(&self) -> Option<&str> {
        self.0.get(MASTER_FINGERPRINT_KEY).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One value produced by an input channel, consumed once by the dispatcher.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportCandidate {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<AdditionalProperties>,
}

impl ImportCandidate {
    pub fn new(text: impl Into<String>, extra: Option<AdditionalProperties>) -> Self {
        Self {
            text: text.into(),
            extra,
        }
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

// The payload is secret material; never print it.
impl fmt::Debug for ImportCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImportCandidate")
            .field("text_len", &self.text.len())
            .field("words", &self.word_count())
            .field("extra", &self.extra)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelChoice {
    Cancel,
    TakePhoto,
    ChoosePhoto,
    CopyFromClipboard,
}

impl ChannelChoice {
    pub fn label(self) -> &'static str {
        match self {
            ChannelChoice::Cancel => "Cancel",
            ChannelChoice::TakePhoto => "Take Photo",
            ChannelChoice::ChoosePhoto => "Choose Photo",
            ChannelChoice::CopyFromClipboard => "Copy from Clipboard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageSource {
    Camera,
    Library,
}

/// Output of the QR decoder for a single image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeResult {
    Decoded(String),
    NoCode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedImage {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    Picked(PickedImage),
    Aborted,
}

/// End result of one camera or library run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acquisition {
    Aborted,
    Decoded(String),
    NoCode,
}

impl From<DecodeResult> for Acquisition {
    fn from(result: DecodeResult) -> Self {
        match result {
            DecodeResult::Decoded(text) => Acquisition::Decoded(text),
            DecodeResult::NoCode => Acquisition::NoCode,
        }
    }
}

/// How the host platform reports picked files and keyboard edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformFamily {
    /// Picker returns `file://` URIs, keyboard signals fire before display.
    UriPrefixed,
    /// Picker returns bare paths, keyboard signals fire after display.
    BarePath,
}

/// Platform features resolved once at startup and injected into the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub family: PlatformFamily,
    pub has_native_accessory: bool,
    pub has_action_sheet: bool,
}

/// Handed out when an image acquisition starts; results only land through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AcquisitionTicket {
    pub epoch: u64,
    pub id: u64,
    pub source: ImageSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenStatus {
    Editing,
    Dismissed,
}

use thiserror::Error;

use crate::domain::{AdditionalProperties, DecodeResult, ImageSource, PickerOutcome, PlatformFamily};

#[derive(Debug, Error)]
pub enum PortError {
    #[error("port not implemented: {0}")]
    NotImplemented(&'static str),
    #[error("unavailable: {0}")]
    Unavailable(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("transport error: {0}")]
    Transport(String),
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("import text was not recognized: {0}")]
    Rejected(String),
    #[error(transparent)]
    Port(#[from] PortError),
}

/// Identifies one registered keyboard listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

pub trait ImportProcessorPort {
    fn process(&self, text: &str, extra: Option<&AdditionalProperties>) -> Result<(), ImportError>;
}

pub trait ScreenHostPort {
    fn pop_screen(&self);
    fn set_privacy_shield(&self, enabled: bool);
}

pub trait ClipboardPort {
    fn read_text(&self) -> Result<String, PortError>;
}

pub trait ImagePickerPort {
    fn open(&self, source: ImageSource) -> Result<PickerOutcome, PortError>;
}

pub trait QrDecoderPort {
    fn decode(&self, path: &str) -> Result<DecodeResult, PortError>;
}

pub trait FeedbackPort {
    fn notify_error(&self);
    fn alert(&self, message: &str);
}

pub trait KeyboardPort {
    fn subscribe(&self, family: PlatformFamily) -> Result<ListenerId, PortError>;
    fn unsubscribe(&self, id: ListenerId);
    fn dismiss(&self);
}

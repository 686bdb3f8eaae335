use wallet_import_core::{ClipboardPort, PortError};

/// System clipboard through arboard. A fresh handle is opened per read so
/// the adapter stays `Send` and cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct ArboardClipboard;

impl ClipboardPort for ArboardClipboard {
    fn read_text(&self) -> Result<String, PortError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| PortError::Unavailable(format!("clipboard: {e}")))?;
        match clipboard.get_text() {
            Ok(text) => Ok(text),
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(PortError::Unavailable(format!("clipboard read: {e}"))),
        }
    }
}

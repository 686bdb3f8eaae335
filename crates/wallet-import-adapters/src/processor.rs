use std::sync::mpsc::{self, Receiver, Sender};

use wallet_import_core::{
    AdditionalProperties, ImportCandidate, ImportError, ImportProcessorPort, PortError,
};

/// Hands accepted candidates to the wallet layer that owns parsing and
/// storage. A dropped receiver means nobody can take the import.
#[derive(Debug, Clone)]
pub struct HandoffProcessor {
    sender: Sender<ImportCandidate>,
}

pub fn handoff_channel() -> (HandoffProcessor, Receiver<ImportCandidate>) {
    let (sender, receiver) = mpsc::channel();
    (HandoffProcessor { sender }, receiver)
}

impl ImportProcessorPort for HandoffProcessor {
    fn process(&self, text: &str, extra: Option<&AdditionalProperties>) -> Result<(), ImportError> {
        if text.trim().is_empty() {
            return Err(ImportError::Rejected("empty import text".to_owned()));
        }
        let candidate = ImportCandidate::new(text, extra.cloned());
        self.sender
            .send(candidate)
            .map_err(|_| PortError::Transport("import receiver closed".to_owned()))?;
        Ok(())
    }
}

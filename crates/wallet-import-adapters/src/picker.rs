use std::path::PathBuf;

use rfd::AsyncFileDialog;
use tokio::runtime::{Builder, Handle};

use wallet_import_core::{ImagePickerPort, ImageSource, PickedImage, PickerOutcome, PortError};

/// Desktop picker: both sources open a native file dialog, the camera source
/// starting in the capture directory.
#[derive(Debug, Clone)]
pub struct RfdImagePicker {
    capture_dir: Option<PathBuf>,
    extensions: Vec<String>,
}

impl RfdImagePicker {
    pub fn new(capture_dir: Option<PathBuf>, extensions: Vec<String>) -> Self {
        Self {
            capture_dir,
            extensions,
        }
    }

    fn dialog(&self, source: ImageSource) -> AsyncFileDialog {
        let mut dialog = AsyncFileDialog::new().add_filter("Images", self.extensions.as_slice());
        if source == ImageSource::Camera {
            if let Some(dir) = self.capture_dir.as_ref() {
                dialog = dialog.set_directory(dir);
            }
        }
        dialog
    }
}

impl ImagePickerPort for RfdImagePicker {
    fn open(&self, source: ImageSource) -> Result<PickerOutcome, PortError> {
        let pick = self.dialog(source).pick_file();
        // Runs on a blocking worker: reuse the ambient runtime when there is one.
        let picked = match Handle::try_current() {
            Ok(handle) => handle.block_on(pick),
            Err(_) => Builder::new_current_thread()
                .build()
                .map_err(|e| PortError::Unavailable(format!("picker runtime: {e}")))?
                .block_on(pick),
        };
        let Some(file) = picked else {
            return Ok(PickerOutcome::Aborted);
        };
        Ok(PickerOutcome::Picked(PickedImage {
            path: file.path().to_string_lossy().into_owned(),
        }))
    }
}

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use image::{ImageBuffer, Luma};
use qrcode::{Color, QrCode};

use wallet_import_core::{
    ClipboardPort, ImagePickerPort, ImageSource, PickedImage, PickerOutcome, PortError,
};

const QUIET_ZONE: u32 = 4;
const SCALE: u32 = 8;

/// Renders `data` as a black-on-white QR code PNG inside `dir`.
pub fn write_qr_png(dir: &Path, name: &str, data: &str) -> PathBuf {
    let code = QrCode::new(data.as_bytes()).expect("encode qr");
    let modules = code.width() as u32;
    let colors = code.to_colors();
    let side = (modules + 2 * QUIET_ZONE) * SCALE;
    let img: ImageBuffer<Luma<u8>, Vec<u8>> = ImageBuffer::from_fn(side, side, |x, y| {
        let mx = (x / SCALE).checked_sub(QUIET_ZONE);
        let my = (y / SCALE).checked_sub(QUIET_ZONE);
        let dark = match (mx, my) {
            (Some(mx), Some(my)) if mx < modules && my < modules => {
                matches!(colors[(my * modules + mx) as usize], Color::Dark)
            }
            _ => false,
        };
        if dark {
            Luma([0u8])
        } else {
            Luma([255u8])
        }
    });
    let path = dir.join(name);
    img.save(&path).expect("write qr png");
    path
}

pub fn write_blank_png(dir: &Path, name: &str) -> PathBuf {
    let img: ImageBuffer<Luma<u8>, Vec<u8>> = ImageBuffer::from_pixel(64, 64, Luma([255u8]));
    let path = dir.join(name);
    img.save(&path).expect("write blank png");
    path
}

#[derive(Debug, Default)]
pub struct StaticClipboard(pub String);

impl ClipboardPort for StaticClipboard {
    fn read_text(&self) -> Result<String, PortError> {
        Ok(self.0.clone())
    }
}

/// Picker that "captures" a prepared file, as a `file://` URI if asked.
#[derive(Debug)]
pub struct PreparedPicker {
    path: Option<String>,
    opened: Mutex<Vec<ImageSource>>,
}

impl PreparedPicker {
    pub fn bare(path: &Path) -> Self {
        Self {
            path: Some(path.to_string_lossy().into_owned()),
            opened: Mutex::new(Vec::new()),
        }
    }

    pub fn uri(path: &Path) -> Self {
        Self {
            path: Some(format!("file://{}", path.to_string_lossy())),
            opened: Mutex::new(Vec::new()),
        }
    }

    pub fn cancelled() -> Self {
        Self {
            path: None,
            opened: Mutex::new(Vec::new()),
        }
    }

    pub fn opened(&self) -> Vec<ImageSource> {
        self.opened.lock().expect("opened lock").clone()
    }
}

impl ImagePickerPort for PreparedPicker {
    fn open(&self, source: ImageSource) -> Result<PickerOutcome, PortError> {
        self.opened.lock().expect("opened lock").push(source);
        Ok(match self.path.as_ref() {
            Some(path) => PickerOutcome::Picked(PickedImage { path: path.clone() }),
            None => PickerOutcome::Aborted,
        })
    }
}

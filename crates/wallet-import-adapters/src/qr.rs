use std::collections::HashSet;
use std::path::Path;

use rxing::common::HybridBinarizer;
use rxing::{
    BarcodeFormat, BinaryBitmap, DecodeHintValue, DecodeHints, Exceptions, Luma8LuminanceSource,
    MultiFormatReader, Reader,
};

use wallet_import_core::{DecodeResult, PortError, QrDecoderPort};

/// Decodes the first QR code found in an image file.
#[derive(Debug, Clone)]
pub struct RxingQrDecoder {
    max_image_bytes: u64,
}

impl Default for RxingQrDecoder {
    fn default() -> Self {
        Self::new(16 * 1024 * 1024)
    }
}

impl RxingQrDecoder {
    pub fn new(max_image_bytes: u64) -> Self {
        Self { max_image_bytes }
    }

    pub fn decode_luma(
        &self,
        luma: Vec<u8>,
        width: u32,
        height: u32,
    ) -> Result<DecodeResult, PortError> {
        let hints = DecodeHints::default()
            .with(DecodeHintValue::TryHarder(true))
            .with(DecodeHintValue::PossibleFormats(HashSet::from([
                BarcodeFormat::QR_CODE,
            ])));

        let source = Luma8LuminanceSource::new(luma, width, height);
        let mut bitmap = BinaryBitmap::new(HybridBinarizer::new(source));
        let mut reader = MultiFormatReader::default();

        match reader.decode_with_hints(&mut bitmap, &hints) {
            Ok(result) => Ok(DecodeResult::Decoded(result.getText().to_string())),
            Err(Exceptions::NotFoundException(_)) => Ok(DecodeResult::NoCode),
            // Finder patterns located but the payload did not survive.
            Err(Exceptions::ChecksumException(_)) | Err(Exceptions::FormatException(_)) => {
                Ok(DecodeResult::NoCode)
            }
            Err(e) => Err(PortError::Decode(format!("qr decode failed: {e:?}"))),
        }
    }
}

impl QrDecoderPort for RxingQrDecoder {
    fn decode(&self, path: &str) -> Result<DecodeResult, PortError> {
        let path = Path::new(path);
        let size = std::fs::metadata(path)
            .map_err(|e| PortError::Io(format!("{}: {e}", path.display())))?
            .len();
        if size > self.max_image_bytes {
            tracing::warn!(size, limit = self.max_image_bytes, "image too large to scan");
            return Ok(DecodeResult::NoCode);
        }

        let luma = image::open(path)
            .map_err(|e| PortError::Decode(format!("{}: {e}", path.display())))?
            .to_luma8();
        let (width, height) = luma.dimensions();
        tracing::debug!(width, height, "scanning image for qr code");
        self.decode_luma(luma.into_raw(), width, height)
    }
}

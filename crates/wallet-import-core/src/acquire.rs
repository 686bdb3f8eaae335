use crate::domain::{Acquisition, ImageSource, PickerOutcome, PlatformFamily};
use crate::ports::{ImagePickerPort, QrDecoderPort};

const FILE_URI_PREFIX: &str = "file://";

/// Turns a picker result into a path the decoder can open.
pub fn normalize_picked_path(raw: &str, family: PlatformFamily) -> String {
    match family {
        PlatformFamily::UriPrefixed => raw.replacen(FILE_URI_PREFIX, "", 1),
        PlatformFamily::BarePath => raw.to_owned(),
    }
}

/// Runs one picker + decode pass. Safe to call off the UI loop; the result is
/// applied later through the screen's ticket.
pub fn acquire_from<P, D>(
    picker: &P,
    decoder: &D,
    source: ImageSource,
    family: PlatformFamily,
) -> Acquisition
where
    P: ImagePickerPort + ?Sized,
    D: QrDecoderPort + ?Sized,
{
    let picked = match picker.open(source) {
        Ok(PickerOutcome::Picked(image)) => image,
        Ok(PickerOutcome::Aborted) => {
            tracing::debug!(?source, "picker aborted");
            return Acquisition::Aborted;
        }
        Err(err) => {
            tracing::warn!(?source, %err, "picker failed");
            return Acquisition::Aborted;
        }
    };

    let path = normalize_picked_path(&picked.path, family);
    match decoder.decode(&path) {
        Ok(result) => result.into(),
        Err(err) => {
            tracing::warn!(?source, %err, "image could not be decoded");
            Acquisition::NoCode
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DecodeResult;
    use crate::ports::PortError;

    struct BrokenPicker;

    impl ImagePickerPort for BrokenPicker {
        fn open(&self, _source: ImageSource) -> Result<PickerOutcome, PortError> {
            Err(PortError::Unavailable("no camera".into()))
        }
    }

    struct UnreachableDecoder;

    impl QrDecoderPort for UnreachableDecoder {
        fn decode(&self, path: &str) -> Result<DecodeResult, PortError> {
            panic!("decoder reached with {path}");
        }
    }

    #[test]
    fn picker_failure_reads_as_abort() {
        let acquisition = acquire_from(
            &BrokenPicker,
            &UnreachableDecoder,
            ImageSource::Camera,
            PlatformFamily::UriPrefixed,
        );
        assert_eq!(acquisition, Acquisition::Aborted);
    }

    #[test]
    fn uri_prefixed_paths_lose_the_scheme() {
        assert_eq!(
            normalize_picked_path("file:///var/mobile/photo.jpg", PlatformFamily::UriPrefixed),
            "/var/mobile/photo.jpg"
        );
    }

    #[test]
    fn bare_paths_are_untouched() {
        assert_eq!(
            normalize_picked_path("/storage/emulated/0/DCIM/a.jpg", PlatformFamily::BarePath),
            "/storage/emulated/0/DCIM/a.jpg"
        );
        assert_eq!(
            normalize_picked_path("file:///sdcard/a.jpg", PlatformFamily::BarePath),
            "file:///sdcard/a.jpg"
        );
    }
}

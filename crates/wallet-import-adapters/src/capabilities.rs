use wallet_import_core::{Capabilities, PlatformFamily};

/// Resolves the platform descriptor once at startup.
pub fn resolve_capabilities() -> Capabilities {
    if cfg!(target_os = "ios") {
        Capabilities {
            family: PlatformFamily::UriPrefixed,
            has_native_accessory: true,
            has_action_sheet: true,
        }
    } else if cfg!(target_os = "android") {
        Capabilities {
            family: PlatformFamily::BarePath,
            has_native_accessory: false,
            has_action_sheet: false,
        }
    } else {
        // Desktop: the shell draws the sheet as a modal and the toolbar
        // follows text focus.
        Capabilities {
            family: PlatformFamily::BarePath,
            has_native_accessory: true,
            has_action_sheet: true,
        }
    }
}

pub mod capabilities;
pub mod config;
pub mod feedback;
pub mod host;
pub mod keyboard;
pub mod processor;
pub mod qr;

#[cfg(not(target_arch = "wasm32"))]
pub mod clipboard;
#[cfg(not(target_arch = "wasm32"))]
pub mod picker;

pub use capabilities::resolve_capabilities;
pub use config::{ConfigError, ImportScreenConfig, CONFIG_ENV};
pub use feedback::NoticeBoard;
pub use host::NavigationStack;
pub use keyboard::KeyboardHub;
pub use processor::{handoff_channel, HandoffProcessor};
pub use qr::RxingQrDecoder;

#[cfg(not(target_arch = "wasm32"))]
pub use clipboard::ArboardClipboard;
#[cfg(not(target_arch = "wasm32"))]
pub use picker::RfdImagePicker;

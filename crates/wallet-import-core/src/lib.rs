pub mod acquire;
pub mod domain;
pub mod ports;
pub mod screen;
pub mod selector;
pub mod state_machine;

pub use acquire::{acquire_from, normalize_picked_path};
pub use domain::{
    Acquisition, AcquisitionTicket, AdditionalProperties, Capabilities, ChannelChoice,
    DecodeResult, ImageSource, ImportCandidate, PickedImage, PickerOutcome, PlatformFamily,
    ScreenStatus, MASTER_FINGERPRINT_KEY,
};
pub use ports::{
    ClipboardPort, FeedbackPort, ImagePickerPort, ImportError, ImportProcessorPort, KeyboardPort,
    ListenerId, PortError, QrDecoderPort, ScreenHostPort,
};
pub use screen::{
    AcquisitionApplied, CommandResult, DispatchOutcome, ImportScreen, ScreenCommand, Selection,
    IMPORT_ERROR_MESSAGE, NO_QR_CODE_MESSAGE, SCREEN_TITLE,
};
pub use selector::{
    build_channel_menu, route, ChannelMenu, ChannelRoute, ClipboardEmptiness, Presentation,
};
pub use state_machine::{
    toolbar_transition, KeyboardEdge, KeyboardSignal, KeyboardSubscription, KeyboardTracker,
    StateTransition, ToolbarState, TransitionError,
};

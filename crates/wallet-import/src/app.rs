//! Main application state and update loop

use eframe::egui;
use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};
use tokio::runtime::Runtime;

use wallet_import_adapters::{
    handoff_channel, ArboardClipboard, HandoffProcessor, ImportScreenConfig, KeyboardHub,
    NavigationStack, NoticeBoard, RfdImagePicker, RxingQrDecoder,
};
use wallet_import_core::{
    acquire_from, Acquisition, AcquisitionTicket, Capabilities, ImportCandidate, ImportScreen,
    ScreenHostPort,
};

use crate::import_view::{self, ShellScreen, ViewState};
use crate::ui;

const HOME: &str = "wallets";
const IMPORT: &str = "import";

/// Finished acquisitions waiting for the UI loop
type AcquisitionInbox = Arc<Mutex<Vec<(AcquisitionTicket, Acquisition)>>>;

/// Redacted record of an import handed to the wallet layer
struct ImportedSummary {
    words: usize,
    chars: usize,
    fingerprint: Option<String>,
}

impl From<&ImportCandidate> for ImportedSummary {
    fn from(candidate: &ImportCandidate) -> Self {
        Self {
            words: candidate.word_count(),
            chars: candidate.text.chars().count(),
            fingerprint: candidate
                .extra
                .as_ref()
                .and_then(|extra| extra.master_fingerprint())
                .map(ToOwned::to_owned),
        }
    }
}

/// The main application state
pub struct App {
    config: ImportScreenConfig,
    capabilities: Capabilities,
    runtime: Runtime,
    nav: NavigationStack,
    notices: NoticeBoard,
    keyboard: KeyboardHub,
    processor: HandoffProcessor,
    /// Candidates accepted by the screen, standing in for the wallet layer
    handoff: Receiver<ImportCandidate>,
    picker: Arc<RfdImagePicker>,
    decoder: Arc<RxingQrDecoder>,
    /// Mounted import screen, if it is on top of the stack
    screen: Option<ShellScreen>,
    view: ViewState,
    acquisitions: AcquisitionInbox,
    imported: Vec<ImportedSummary>,
}

impl App {
    /// Create a new App instance
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: ImportScreenConfig,
        runtime: Runtime,
    ) -> Self {
        let capabilities = config.capabilities();
        tracing::info!(?capabilities, "platform capabilities resolved");
        let (processor, handoff) = handoff_channel();
        let picker =
            RfdImagePicker::new(config.capture_dir.clone(), config.image_extensions.clone());
        let decoder = RxingQrDecoder::new(config.max_image_bytes);

        Self {
            capabilities,
            runtime,
            nav: NavigationStack::new(HOME),
            notices: NoticeBoard::default(),
            keyboard: KeyboardHub::default(),
            processor,
            handoff,
            picker: Arc::new(picker),
            decoder: Arc::new(decoder),
            screen: None,
            view: ViewState::default(),
            acquisitions: Arc::new(Mutex::new(Vec::new())),
            imported: Vec::new(),
            config,
        }
    }

    fn open_import_screen(&mut self) {
        let mut screen = ImportScreen::new(
            self.processor.clone(),
            self.nav.clone(),
            ArboardClipboard,
            self.notices.clone(),
            self.keyboard.clone(),
            self.capabilities,
            self.config.clipboard_emptiness,
        )
        .with_initial_text(self.config.label.clone());

        if let Err(e) = screen.mount() {
            tracing::error!(%e, "import screen failed to mount");
            return;
        }
        self.nav.push(IMPORT);
        self.view = ViewState::default();
        self.screen = Some(screen);
    }

    /// Unmounts the screen once the host has popped it.
    fn sync_navigation(&mut self) {
        if self.nav.top().as_deref() == Some(IMPORT) {
            return;
        }
        if let Some(mut screen) = self.screen.take() {
            screen.unmount();
        }
    }

    fn check_acquisitions(&mut self) {
        let finished = {
            let mut guard = self.acquisitions.lock().unwrap_or_else(|e| e.into_inner());
            std::mem::take(&mut *guard)
        };

        for (ticket, acquisition) in finished {
            match self.screen.as_mut() {
                Some(screen) => {
                    let applied = screen.complete_acquisition(ticket, acquisition);
                    tracing::debug!(?ticket, ?applied, "acquisition applied");
                }
                None => tracing::debug!(?ticket, "acquisition finished after screen closed"),
            }
        }
    }

    fn check_handoff(&mut self) {
        while let Ok(candidate) = self.handoff.try_recv() {
            tracing::info!(?candidate, "wallet import received");
            self.imported.push(ImportedSummary::from(&candidate));
        }
    }

    /// Runs picker and decoder off the UI thread; the result comes back
    /// through the inbox on a later frame.
    fn start_acquisition(&self, ticket: AcquisitionTicket, ctx: &egui::Context) {
        let picker = Arc::clone(&self.picker);
        let decoder = Arc::clone(&self.decoder);
        let inbox = Arc::clone(&self.acquisitions);
        let family = self.capabilities.family;
        let ctx = ctx.clone();

        self.runtime.spawn_blocking(move || {
            let acquisition =
                acquire_from(picker.as_ref(), decoder.as_ref(), ticket.source, family);
            inbox
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push((ticket, acquisition));
            ctx.request_repaint();
        });
    }

    fn render_home(&mut self, ui: &mut egui::Ui) {
        ui::styled_heading(ui, "Wallets");
        ui.add_space(10.0);

        if self.imported.is_empty() {
            ui.label("No wallets imported yet.");
        } else {
            ui::section_header(ui, "Imported this session");
            for (index, summary) in self.imported.iter().enumerate() {
                let mut line = format!(
                    "#{}: {} words, {} characters",
                    index + 1,
                    summary.words,
                    summary.chars
                );
                if let Some(fp) = summary.fingerprint.as_ref() {
                    line.push_str(&format!(", fingerprint {fp}"));
                }
                ui.label(egui::RichText::new(line).monospace());
            }
        }

        ui.add_space(20.0);
        if ui.button("Import wallet").clicked() {
            self.open_import_screen();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        self.check_acquisitions();
        self.check_handoff();
        self.sync_navigation();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(10.0);
            let started = match self.screen.as_mut() {
                Some(screen) => {
                    if ui.button("< Back").clicked() {
                        screen.unmount();
                        self.screen = None;
                        self.nav.pop_screen();
                        Vec::new()
                    } else {
                        import_view::render(ui, screen, &mut self.view)
                    }
                }
                None => {
                    self.render_home(ui);
                    Vec::new()
                }
            };
            for ticket in started {
                self.start_acquisition(ticket, ctx);
            }
        });

        // The screen may have popped itself during this frame.
        self.sync_navigation();
    }
}

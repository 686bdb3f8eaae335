//! The import screen: field, import button, scan link, channel sheet,
//! accessory toolbar and alerts.

use eframe::egui;
use wallet_import_adapters::{
    ArboardClipboard, HandoffProcessor, KeyboardHub, NavigationStack, NoticeBoard,
};
use wallet_import_core::{
    AcquisitionTicket, ChannelChoice, ChannelMenu, ClipboardPort, ImportScreen, KeyboardEdge,
    KeyboardSignal, Presentation, Selection,
};

use crate::ui;

pub type ShellScreen =
    ImportScreen<HandoffProcessor, NavigationStack, ArboardClipboard, NoticeBoard, KeyboardHub>;

const EXPLANATION: &str = "Paste or type your recovery phrase, private key, WIF or \
    extended public key. The format is detected automatically.";
const PULSE_SECONDS: f64 = 0.6;

/// Per-mount view state that egui needs across frames.
#[derive(Debug, Default)]
pub struct ViewState {
    field_focused: bool,
    toolbar_hovered: bool,
    seen_haptics: u64,
    pulse_started: Option<f64>,
}

/// Renders the screen and returns acquisitions the shell must run.
pub fn render(
    ui: &mut egui::Ui,
    screen: &mut ShellScreen,
    view: &mut ViewState,
) -> Vec<AcquisitionTicket> {
    let mut started = Vec::new();
    let now = ui.input(|i| i.time);

    let haptics = screen.feedback.haptics();
    if haptics > view.seen_haptics {
        view.seen_haptics = haptics;
        view.pulse_started = Some(now);
    }
    if let Some(start) = view.pulse_started {
        let remaining = 1.0 - ((now - start) / PULSE_SECONDS);
        if remaining > 0.0 {
            ui::error_pulse(ui, remaining as f32);
            ui.ctx().request_repaint();
        } else {
            view.pulse_started = None;
        }
    }

    ui::styled_heading(ui, screen.title());
    ui.add_space(8.0);
    ui.label(EXPLANATION);
    ui.add_space(12.0);

    let mut text = screen.import_text().to_owned();
    let response = ui.add(
        egui::TextEdit::multiline(&mut text)
            .desired_rows(5)
            .desired_width(f32::INFINITY)
            .font(egui::TextStyle::Monospace)
            .hint_text("abandon ability able ..."),
    );
    if response.changed() {
        screen.set_import_text(text);
    }
    if response.gained_focus() {
        forward_keyboard(screen, KeyboardEdge::Show);
    }
    if response.lost_focus() && !view.toolbar_hovered {
        forward_keyboard(screen, KeyboardEdge::Hide);
    }
    view.field_focused = response.has_focus();

    // Hovering the toolbar keeps it up while its buttons take the click.
    let visible = screen.toolbar_visible(view.field_focused || view.toolbar_hovered);
    view.toolbar_hovered = visible && render_toolbar(ui, screen);

    if screen.keyboard.take_dismiss() {
        response.surrender_focus();
        view.field_focused = false;
        view.toolbar_hovered = false;
        forward_keyboard(screen, KeyboardEdge::Hide);
    }

    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        let import = ui.add_enabled(
            screen.can_submit(),
            egui::Button::new(egui::RichText::new("Import").strong())
                .min_size(egui::vec2(220.0, 36.0)),
        );
        if import.clicked() {
            screen.submit();
        }
        ui.add_space(12.0);
        if ui.link("Scan or import a file").clicked() {
            screen.present_selector();
        }
    });

    if let Some(menu) = screen.pending_menu().cloned() {
        let choice = match menu.presentation {
            Presentation::ActionSheet => {
                ui::modal(ui.ctx(), "Import from", |ui| channel_buttons(ui, &menu)).flatten()
            }
            Presentation::InAppMenu => {
                ui.add_space(12.0);
                ui::section_header(ui, "Import from");
                channel_buttons(ui, &menu)
            }
        };
        if let Some(choice) = choice {
            if let Selection::Acquire(ticket) = screen.choose(choice) {
                started.push(ticket);
            }
        }
    }

    if let Some(message) = screen.feedback.current_alert() {
        let acknowledged = ui::modal(ui.ctx(), "Wallet import", |ui| {
            ui.label(message);
            ui.add_space(8.0);
            ui.button("OK").clicked()
        });
        if acknowledged == Some(true) {
            screen.feedback.acknowledge();
        }
    }

    started
}

fn channel_buttons(ui: &mut egui::Ui, menu: &ChannelMenu) -> Option<ChannelChoice> {
    let mut picked = None;
    // Cancel leads the list but sits at the bottom, as on native sheets.
    for choice in menu.options.iter().copied().filter(|c| *c != ChannelChoice::Cancel) {
        if ui.add_sized([240.0, 30.0], egui::Button::new(choice.label())).clicked() {
            picked = Some(choice);
        }
    }
    ui.add_space(6.0);
    if ui
        .add_sized([240.0, 30.0], egui::Button::new(ChannelChoice::Cancel.label()))
        .clicked()
    {
        picked = Some(ChannelChoice::Cancel);
    }
    picked
}

/// Returns whether the pointer is over the toolbar.
fn render_toolbar(ui: &mut egui::Ui, screen: &mut ShellScreen) -> bool {
    let row = ui.horizontal(|ui| {
        if ui.button("Clear").clicked() {
            screen.toolbar_clear();
        }
        if ui.button("Paste").clicked() {
            match screen.clipboard.read_text() {
                Ok(text) => screen.toolbar_paste(text),
                Err(err) => tracing::warn!(%err, "paste failed"),
            }
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Done").clicked() {
                screen.toolbar_done();
            }
        });
    });
    row.response.hovered()
}

/// Desktop has no soft keyboard: text focus stands in for it, announced to
/// every listener under both signal names of the edge.
fn forward_keyboard(screen: &mut ShellScreen, edge: KeyboardEdge) {
    let signals = match edge {
        KeyboardEdge::Show => [KeyboardSignal::WillShow, KeyboardSignal::DidShow],
        KeyboardEdge::Hide => [KeyboardSignal::WillHide, KeyboardSignal::DidHide],
    };
    for signal in signals {
        for listener in screen.keyboard.route(signal) {
            screen.on_keyboard_signal(listener, signal);
        }
    }
}

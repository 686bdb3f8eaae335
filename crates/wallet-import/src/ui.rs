//! UI helper components

use eframe::egui;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(0, 212, 170);
pub const ERROR_RED: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);

/// Styled heading with accent color
pub fn styled_heading(ui: &mut egui::Ui, text: &str) {
    ui.heading(egui::RichText::new(text).color(ACCENT));
}

/// Section header with separator
pub fn section_header(ui: &mut egui::Ui, text: &str) {
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(text).strong().size(14.0));
    });
    ui.separator();
}

/// Centered modal window
pub fn modal<R>(
    ctx: &egui::Context,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> Option<R> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, add_contents)
        .and_then(|response| response.inner)
}

/// Red outline drawn briefly after an error haptic on hosts without one
pub fn error_pulse(ui: &mut egui::Ui, strength: f32) {
    if strength <= 0.0 {
        return;
    }
    let color = ERROR_RED.gamma_multiply(strength.clamp(0.0, 1.0));
    ui.painter().rect_stroke(
        ui.max_rect().shrink(2.0),
        egui::Rounding::same(6.0),
        egui::Stroke::new(3.0, color),
    );
}

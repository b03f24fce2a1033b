//! Status bar UI rendering
//!
//! Handles the bottom status bar showing the item count and workspace binding.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use crate::utils::{format_binding, format_item_count};

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(format_item_count(state.shell.store().len())).strong());
        ui.label(RichText::new("|").strong());
        ui.label(format_binding(state.shell.binding().current()));

        if state.shell.always_on_top() {
            ui.label(RichText::new("|").strong());
            ui.label("📌 On top");
        }
    });
}

//! Toast overlay rendering
//!
//! Draws the active notifications centred at the top of the window. Expiry
//! is handled by the shell; this only paints what is still active.

use eframe::egui;
use egui::{Color32, RichText};
use filo::Notifications;

/// Vertical distance between stacked toasts
const TOAST_SPACING: f32 = 40.0;

pub fn render_toasts(ctx: &egui::Context, notifications: &Notifications) {
    for (i, notification) in notifications.active().iter().enumerate() {
        egui::Area::new(egui::Id::new(("toast", i)))
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 10.0 + i as f32 * TOAST_SPACING))
            .order(egui::Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::default()
                    .fill(Color32::BLACK)
                    .corner_radius(15.0)
                    .inner_margin(egui::Margin::symmetric(14, 5))
                    .show(ui, |ui| {
                        ui.label(RichText::new(notification.message()).color(Color32::WHITE));
                    });
            });
    }
}

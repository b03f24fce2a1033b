//! Visual style for the Filo window.
//!
//! Applies the dark palette (charcoal background, gray buttons, white text)
//! to the egui context.

use egui::Color32;

pub const BACKGROUND: Color32 = Color32::from_rgb(0x20, 0x20, 0x20);
pub const BUTTON: Color32 = Color32::from_rgb(0x3a, 0x3a, 0x3a);
pub const BUTTON_HOVER: Color32 = Color32::from_rgb(0x50, 0x50, 0x50);
pub const BORDER: Color32 = Color32::from_rgb(0x44, 0x44, 0x44);
pub const PLACEHOLDER_TEXT: Color32 = Color32::GRAY;
pub const SELECTION: Color32 = Color32::from_rgb(50, 80, 120);
pub const DROP_HIGHLIGHT: Color32 = Color32::from_rgb(90, 140, 220);

/// Coordinates the application's visual style.
pub struct StyleCoordinator;

impl StyleCoordinator {
    /// Builds the dark visuals used by the window.
    pub fn visuals() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();

        visuals.panel_fill = BACKGROUND;
        visuals.window_fill = BACKGROUND;
        visuals.extreme_bg_color = BACKGROUND;
        visuals.widgets.noninteractive.fg_stroke.color = Color32::WHITE;

        visuals.widgets.inactive.bg_fill = BUTTON;
        visuals.widgets.inactive.weak_bg_fill = BUTTON;
        visuals.widgets.inactive.bg_stroke.color = BORDER;
        visuals.widgets.hovered.bg_fill = BUTTON_HOVER;
        visuals.widgets.hovered.weak_bg_fill = BUTTON_HOVER;
        visuals.widgets.active.bg_fill = BUTTON_HOVER;

        visuals.selection.bg_fill = SELECTION;
        visuals
    }

    /// Applies the style to the egui context. Called once at start-up.
    pub fn apply(ctx: &egui::Context) {
        ctx.set_visuals(Self::visuals());
    }
}

//! Panel orchestration and layout management.
//!
//! Lays out the status bar, the file list and the toast overlay, and reads
//! OS drag-and-drop input for the frame.

use crate::app::AppState;
use crate::ui::file_list::{self, FileListInteraction};
use crate::ui::{status_bar, toast_overlay};
use filo::{DragPayload, DropDecision, InteractionController};

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// Files from another application were dropped on the window
    FilesDropped(DragPayload),
    /// Something happened in the file list
    List(FileListInteraction),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        // OS drags hovering the window go through the drag-enter gate
        let hovered = ctx.input(|i| {
            DragPayload::from_paths(i.raw.hovered_files.iter().filter_map(|f| f.path.as_ref()))
        });
        let accepting_drop = !hovered.urls().is_empty()
            && InteractionController::drag_enter_gate(&hovered) == DropDecision::Accept;

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        let list_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(8))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default()
            .frame(list_frame)
            .show(ctx, |ui| {
                if let Some(list_interaction) = file_list::render_file_list(ui, state, accepting_drop) {
                    interaction = Some(PanelInteraction::List(list_interaction));
                }
            });

        toast_overlay::render_toasts(ctx, state.shell.notifications());

        // A drop in the same frame wins over list clicks
        let dropped = ctx.input(|i| {
            if i.raw.dropped_files.is_empty() {
                None
            } else {
                Some(DragPayload::from_paths(
                    i.raw.dropped_files.iter().filter_map(|f| f.path.as_ref()),
                ))
            }
        });
        if let Some(payload) = dropped {
            interaction = Some(PanelInteraction::FilesDropped(payload));
        }

        interaction
    }
}

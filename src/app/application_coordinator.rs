//! Application-level coordination and workflow management.
//!
//! Turns panel interactions into calls on the core `InteractionController`
//! and `AppShell`, then applies the results to the window (viewport
//! commands, clipboard) and to presentation state.

use crate::app::AppState;
use crate::utils::format_copied;
use filo::{
    CloseDecision, DragPayload, DropDecision, InteractionController, Launcher, MenuAction,
    MenuOutcome, Prompter,
};
use std::time::Instant;

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Dispatching context-menu actions
/// - Applying drops, reorders and exports to the list
/// - Running the start-up and close prompts
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Offers to load a workspace before the first frame.
    pub fn run_startup(state: &mut AppState, prompter: &mut dyn Prompter) {
        if let Ok(true) = state.shell.on_startup(prompter) {
            state.remember_workspace_dir();
        }
    }

    /// Dispatches a context-menu action and applies its outcome.
    pub fn handle_menu_action(
        state: &mut AppState,
        action: MenuAction,
        prompter: &mut dyn Prompter,
        ctx: &egui::Context,
    ) {
        let outcome =
            InteractionController::on_menu_action(&mut state.shell, action, prompter, Instant::now());

        match outcome {
            MenuOutcome::StoreChanged => {
                state.selection.clear();
            }
            MenuOutcome::WindowLevelChanged(on_top) => {
                let level = if on_top {
                    egui::WindowLevel::AlwaysOnTop
                } else {
                    egui::WindowLevel::Normal
                };
                ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(level));
                ctx.request_repaint();
            }
            MenuOutcome::Unchanged => {}
        }

        if matches!(action, MenuAction::Save | MenuAction::Load) {
            state.remember_workspace_dir();
        }
    }

    /// Adds dropped files if the payload passes the drag-enter gate.
    pub fn handle_files_dropped(state: &mut AppState, payload: &DragPayload) -> DropDecision {
        InteractionController::handle_drop(state.shell.store_mut(), payload)
    }

    /// Updates the selection for a click on a row.
    pub fn handle_row_clicked(state: &mut AppState, index: usize, command: bool, shift: bool) {
        if shift {
            state.selection.extend_to(index);
        } else if command {
            state.selection.toggle(index);
        } else {
            state.selection.select_only(index);
        }
    }

    /// Opens a row with the default application.
    pub fn handle_open_requested(
        state: &AppState,
        index: usize,
        launcher: &dyn Launcher,
        prompter: &mut dyn Prompter,
    ) {
        // The error has already been shown to the user.
        let _ = InteractionController::on_double_click(state.shell.store(), index, launcher, prompter);
    }

    /// Moves a row and keeps it selected at its new position.
    pub fn handle_reorder(state: &mut AppState, from: usize, to: usize) {
        if InteractionController::on_reorder(state.shell.store_mut(), from, to) {
            state.selection.select_only(to);
        }
    }

    /// Exports the current selection to the clipboard as a `text/uri-list`.
    ///
    /// Returns false when nothing is selected.
    pub fn handle_export(state: &mut AppState, ctx: &egui::Context) -> bool {
        let selected = state.selection.selected_indices();
        let Some(payload) = InteractionController::on_drag_export(state.shell.store(), &selected) else {
            return false;
        };

        ctx.copy_text(payload.to_uri_list());
        state.shell.notify(format_copied(payload.urls().len()), Instant::now());
        ctx.request_repaint();
        true
    }

    /// A row was dragged out of the list: export it together with the selection.
    pub fn handle_export_drag(state: &mut AppState, index: usize, ctx: &egui::Context) -> bool {
        if !state.selection.is_selected(index) {
            state.selection.select_only(index);
        }
        Self::handle_export(state, ctx)
    }

    /// Runs the Save/Discard/Cancel prompt for a window close request.
    ///
    /// The close is always cancelled first; if the user lets it proceed the
    /// window is closed again with `close_confirmed` set.
    pub fn handle_close_request(
        state: &mut AppState,
        prompter: &mut dyn Prompter,
        ctx: &egui::Context,
    ) -> CloseDecision {
        ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);

        let decision = state.shell.on_close_request(prompter);
        state.remember_workspace_dir();
        if decision == CloseDecision::Proceed {
            state.close_confirmed = true;
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        decision
    }
}

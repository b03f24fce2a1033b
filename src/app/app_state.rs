//! Centralized application state for the Filo window.
//!
//! Composes the toolkit-independent `AppShell` with the presentation state
//! the front end needs on top of it.

use crate::state::SelectionState;
use filo::AppShell;
use std::path::PathBuf;

/// Main application state.
pub struct AppState {
    /// Path store, workspace binding, window flags and notifications
    pub shell: AppShell,

    /// Selected rows of the file list
    pub selection: SelectionState,

    /// Directory of the last saved or loaded workspace (persisted preference)
    pub last_workspace_dir: Option<PathBuf>,

    /// Set once the exit prompt allowed the window to close
    pub close_confirmed: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with an empty list.
    pub fn new() -> Self {
        Self {
            shell: AppShell::new(),
            selection: SelectionState::new(),
            last_workspace_dir: None,
            close_confirmed: false,
        }
    }

    /// Creates a new AppState with the workspace directory loaded from storage.
    pub fn with_workspace_dir(last_workspace_dir: Option<PathBuf>) -> Self {
        Self {
            last_workspace_dir,
            ..Self::new()
        }
    }

    /// Records the bound workspace's directory as the dialogs' starting point.
    pub fn remember_workspace_dir(&mut self) {
        if let Some(dir) = self.shell.binding().current().and_then(|p| p.parent()) {
            if !dir.as_os_str().is_empty() {
                self.last_workspace_dir = Some(dir.to_path_buf());
            }
        }
    }
}

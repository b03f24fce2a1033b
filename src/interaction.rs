//! Translation of user gestures into store and shell operations.
//!
//! The rendering layer turns raw toolkit events into calls on
//! [`InteractionController`]; every context-menu choice arrives as a
//! [`MenuAction`] and is dispatched from one table.

use crate::error::OpenError;
use crate::path_store::PathStore;
use crate::shell::AppShell;
use crate::traits::{Launcher, Prompter};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};
use url::Url;

/// Inbound drag contents, as advertised by the platform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragPayload {
    urls: Vec<Url>,
}

impl DragPayload {
    pub fn new(urls: Vec<Url>) -> Self {
        Self { urls }
    }

    /// Builds a payload from local paths, dropping any that cannot be expressed as `file://` URLs.
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let urls = paths
            .into_iter()
            .filter_map(|p| Url::from_file_path(p.as_ref()).ok())
            .collect();
        Self { urls }
    }

    pub fn urls(&self) -> &[Url] {
        &self.urls
    }

    /// True if at least one URL uses the `file` scheme.
    pub fn has_file_urls(&self) -> bool {
        self.urls.iter().any(|u| u.scheme() == "file")
    }
}

/// Verdict of the drag-enter gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropDecision {
    Accept,
    Reject,
}

/// Outbound drag contents. Receivers copy the files; nothing is moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    urls: Vec<Url>,
}

impl ExportPayload {
    pub fn urls(&self) -> &[Url] {
        &self.urls
    }

    /// `text/uri-list` rendering, one URL per CRLF-terminated line.
    pub fn to_uri_list(&self) -> String {
        self.urls.iter().map(|u| format!("{u}\r\n")).collect()
    }
}

/// Closed set of context-menu commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Add,
    Clear,
    Save,
    Load,
    ToggleAlwaysOnTop,
}

/// A context-menu item ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub action: MenuAction,
    pub label: &'static str,
}

/// What a dispatched menu action did, for the front end to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Entries were added or removed, or a workspace replaced them.
    StoreChanged,
    /// The window level must be set to the given always-on-top state.
    WindowLevelChanged(bool),
    /// Nothing observable changed (cancelled, failed, or saved).
    Unchanged,
}

/// Stateless dispatcher for user gestures.
pub struct InteractionController;

impl InteractionController {
    /// Accepts a drag iff it carries at least one file URL.
    pub fn drag_enter_gate(payload: &DragPayload) -> DropDecision {
        if payload.has_file_urls() {
            DropDecision::Accept
        } else {
            DropDecision::Reject
        }
    }

    /// Adds the local path behind every file URL. Returns the number of new entries.
    pub fn on_external_drop(store: &mut PathStore, urls: &[Url]) -> usize {
        let added = urls
            .iter()
            .filter_map(|u| u.to_file_path().ok())
            .filter(|p| store.add(p.to_string_lossy().into_owned()))
            .count();
        debug!(dropped = urls.len(), added, "external drop");
        added
    }

    /// Runs the gate and, if accepted, the drop. Returns the gate's verdict.
    pub fn handle_drop(store: &mut PathStore, payload: &DragPayload) -> DropDecision {
        let decision = Self::drag_enter_gate(payload);
        if decision == DropDecision::Accept {
            Self::on_external_drop(store, payload.urls());
        }
        decision
    }

    /// Builds the outbound payload for the selected rows.
    ///
    /// Returns `None` when nothing valid is selected. Relative entries are
    /// made absolute against the current directory.
    pub fn on_drag_export(store: &PathStore, selected: &[usize]) -> Option<ExportPayload> {
        let urls: Vec<Url> = selected
            .iter()
            .filter_map(|&i| store.get(i))
            .filter_map(|entry| {
                let absolute = std::path::absolute(entry.path()).ok()?;
                Url::from_file_path(absolute).ok()
            })
            .collect();

        if urls.is_empty() {
            return None;
        }
        debug!(count = urls.len(), "export payload built");
        Some(ExportPayload { urls })
    }

    /// Internal drag within the list.
    pub fn on_reorder(store: &mut PathStore, from: usize, to: usize) -> bool {
        store.reorder(from, to)
    }

    /// Opens the entry at `index` with the default application.
    ///
    /// Failures are reported through the prompter and returned.
    pub fn on_double_click(
        store: &PathStore,
        index: usize,
        launcher: &dyn Launcher,
        prompter: &mut dyn Prompter,
    ) -> Result<(), OpenError> {
        let Some(entry) = store.get(index) else {
            return Ok(());
        };

        info!(path = entry.path(), "opening with default application");
        launcher
            .open(Path::new(entry.path()))
            .map_err(|source| {
                let err = OpenError::OpenFailed {
                    path: entry.path().to_string(),
                    source,
                };
                warn!(error = %err, "open failed");
                prompter.report_error("Error", &err.to_string());
                err
            })
    }

    /// Menu items for the current state, in display order.
    pub fn context_menu(shell: &AppShell) -> Vec<MenuEntry> {
        let toggle_label = if shell.always_on_top() {
            "Disable Always on Top"
        } else {
            "Enable Always on Top"
        };

        vec![
            MenuEntry { action: MenuAction::Add, label: "Add Files/Folders" },
            MenuEntry { action: MenuAction::Clear, label: "Clear Clipboard" },
            MenuEntry { action: MenuAction::Save, label: "Save Workspace" },
            MenuEntry { action: MenuAction::Load, label: "Load Workspace" },
            MenuEntry { action: MenuAction::ToggleAlwaysOnTop, label: toggle_label },
        ]
    }

    /// Dispatches a chosen menu action.
    pub fn on_menu_action(
        shell: &mut AppShell,
        action: MenuAction,
        prompter: &mut dyn Prompter,
        now: Instant,
    ) -> MenuOutcome {
        debug!(?action, "menu action");
        match action {
            MenuAction::Add => {
                if shell.add_via_dialog(prompter) > 0 {
                    MenuOutcome::StoreChanged
                } else {
                    MenuOutcome::Unchanged
                }
            }
            MenuAction::Clear => {
                if shell.clear_with_confirmation(prompter) {
                    MenuOutcome::StoreChanged
                } else {
                    MenuOutcome::Unchanged
                }
            }
            MenuAction::Save => {
                if let Err(e) = shell.save_workspace(prompter) {
                    debug!(error = %e, "save from menu failed");
                }
                MenuOutcome::Unchanged
            }
            MenuAction::Load => match shell.load_workspace(prompter) {
                Ok(true) => MenuOutcome::StoreChanged,
                _ => MenuOutcome::Unchanged,
            },
            MenuAction::ToggleAlwaysOnTop => {
                MenuOutcome::WindowLevelChanged(shell.toggle_always_on_top(now))
            }
        }
    }
}

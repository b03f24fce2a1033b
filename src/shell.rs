//! Window-level application state and the flows that need user prompts.
//!
//! `AppShell` owns the path store and the workspace binding for the lifetime
//! of the window. Flows that ask the user something take a [`Prompter`];
//! errors are reported through it and also returned to the caller.

use crate::error::WorkspaceError;
use crate::notifications::Notifications;
use crate::path_store::PathStore;
use crate::traits::{ExitChoice, Prompter};
use crate::workspace::{WorkspaceBinding, WorkspacePersistence};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Placeholder shown while the store is empty.
pub const PLACEHOLDER_TITLE: &str = "Drag files here";
pub const PLACEHOLDER_HINT: &str = "right click to view options";

pub const ON_TOP_ENABLED_MESSAGE: &str = "Show on Top Enabled!";
pub const ON_TOP_DISABLED_MESSAGE: &str = "Show on Top Disabled!";

/// Outcome of a close request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    Proceed,
    Cancel,
}

pub struct AppShell {
    store: PathStore,
    binding: WorkspaceBinding,
    always_on_top: bool,
    notifications: Notifications,
}

impl Default for AppShell {
    fn default() -> Self {
        Self::new()
    }
}

impl AppShell {
    pub fn new() -> Self {
        Self {
            store: PathStore::new(),
            binding: WorkspaceBinding::new(),
            always_on_top: false,
            notifications: Notifications::new(),
        }
    }

    // ===== Queries =====

    pub fn store(&self) -> &PathStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut PathStore {
        &mut self.store
    }

    pub fn binding(&self) -> &WorkspaceBinding {
        &self.binding
    }

    pub fn always_on_top(&self) -> bool {
        self.always_on_top
    }

    /// True iff the store is empty.
    pub fn placeholder_visible(&self) -> bool {
        self.store.is_empty()
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    // ===== Notifications =====

    pub fn notify(&mut self, message: impl Into<String>, now: Instant) {
        self.notifications.push(message, now);
    }

    /// Removes notifications whose deadline has passed.
    pub fn prune_notifications(&mut self, now: Instant) {
        self.notifications.prune(now);
    }

    // ===== Flows =====

    /// Flips the stay-on-top hint and announces the new state.
    ///
    /// Returns the new state; the caller applies it to the window.
    pub fn toggle_always_on_top(&mut self, now: Instant) -> bool {
        self.always_on_top = !self.always_on_top;
        let message = if self.always_on_top {
            ON_TOP_ENABLED_MESSAGE
        } else {
            ON_TOP_DISABLED_MESSAGE
        };
        self.notifications.push(message, now);
        info!(always_on_top = self.always_on_top, "window level changed");
        self.always_on_top
    }

    /// Asks for files, then for a folder, and adds whatever was picked.
    ///
    /// The folder is inserted ahead of the files. Returns the number of new entries.
    pub fn add_via_dialog(&mut self, prompter: &mut dyn Prompter) -> usize {
        let files = prompter.pick_files();
        let folder = prompter.pick_folder();

        let added = self.add_paths(folder.into_iter().chain(files));
        debug!(added, "entries added from dialogs");
        added
    }

    /// Adds OS paths, skipping ones already tracked. Returns the number added.
    pub fn add_paths(&mut self, paths: impl IntoIterator<Item = PathBuf>) -> usize {
        paths
            .into_iter()
            .filter(|p| self.store.add(p.to_string_lossy().into_owned()))
            .count()
    }

    /// Clears the store only if the user confirms.
    pub fn clear_with_confirmation(&mut self, prompter: &mut dyn Prompter) -> bool {
        let confirmed = prompter.confirm(
            "Confirm Clear",
            "Are you sure you want to clear the clipboard?",
        );
        if confirmed {
            self.store.remove_all();
            info!("clipboard cleared");
        }
        confirmed
    }

    /// Saves to the bound workspace file, prompting for one when unbound.
    ///
    /// Returns `Ok(false)` if the user cancelled the prompt.
    pub fn save_workspace(&mut self, prompter: &mut dyn Prompter) -> Result<bool, WorkspaceError> {
        let target = match self.binding.current() {
            Some(path) => path.to_path_buf(),
            None => match prompter.pick_save_target() {
                Some(path) => path,
                None => {
                    debug!("save cancelled");
                    return Ok(false);
                }
            },
        };

        let result = WorkspacePersistence::save(&self.store, &mut self.binding, &target);
        surface(prompter, result)?;
        prompter.report_info("Saved", "Workspace saved successfully.");
        Ok(true)
    }

    /// Prompts for a workspace file and replaces the store with its contents.
    ///
    /// Returns `Ok(false)` if the user cancelled the prompt.
    pub fn load_workspace(&mut self, prompter: &mut dyn Prompter) -> Result<bool, WorkspaceError> {
        let Some(source) = prompter.pick_workspace() else {
            debug!("load cancelled");
            return Ok(false);
        };

        let result = WorkspacePersistence::load(&mut self.store, &mut self.binding, &source);
        surface(prompter, result)?;
        Ok(true)
    }

    /// Runs the Save/Discard/Cancel prompt before the window closes.
    ///
    /// A failed save keeps the window open so the list is not lost.
    pub fn on_close_request(&mut self, prompter: &mut dyn Prompter) -> CloseDecision {
        let decision = match prompter.ask_save_before_exit() {
            ExitChoice::Save => match self.save_workspace(prompter) {
                Ok(_) => CloseDecision::Proceed,
                Err(_) => CloseDecision::Cancel,
            },
            ExitChoice::Discard => CloseDecision::Proceed,
            ExitChoice::Cancel => CloseDecision::Cancel,
        };
        info!(?decision, "close requested");
        decision
    }

    /// Offers to load a workspace before the window becomes interactive.
    pub fn on_startup(&mut self, prompter: &mut dyn Prompter) -> Result<bool, WorkspaceError> {
        if prompter.confirm("Load Workspace", "Do you want to load a workspace?") {
            self.load_workspace(prompter)
        } else {
            Ok(false)
        }
    }
}

/// Shows a workspace error to the user and passes the result through.
fn surface<T>(
    prompter: &mut dyn Prompter,
    result: Result<T, WorkspaceError>,
) -> Result<T, WorkspaceError> {
    if let Err(e) = &result {
        warn!(error = %e, "workspace operation failed");
        prompter.report_error("Error", &e.to_string());
    }
    result
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::fs;

    /// Prompter that replays scripted answers and records what it was asked.
    #[derive(Default)]
    pub(crate) struct ScriptedPrompter {
        pub files: Vec<PathBuf>,
        pub folder: Option<PathBuf>,
        pub save_target: Option<PathBuf>,
        pub workspace: Option<PathBuf>,
        pub confirms: VecDeque<bool>,
        pub exit_choice: Option<ExitChoice>,
        pub asked: Vec<String>,
        pub errors: Vec<String>,
        pub infos: Vec<String>,
    }

    impl Prompter for ScriptedPrompter {
        fn pick_files(&mut self) -> Vec<PathBuf> {
            self.asked.push("files".into());
            std::mem::take(&mut self.files)
        }

        fn pick_folder(&mut self) -> Option<PathBuf> {
            self.asked.push("folder".into());
            self.folder.take()
        }

        fn pick_save_target(&mut self) -> Option<PathBuf> {
            self.asked.push("save_target".into());
            self.save_target.take()
        }

        fn pick_workspace(&mut self) -> Option<PathBuf> {
            self.asked.push("workspace".into());
            self.workspace.take()
        }

        fn confirm(&mut self, title: &str, _message: &str) -> bool {
            self.asked.push(format!("confirm:{title}"));
            self.confirms.pop_front().unwrap_or(false)
        }

        fn ask_save_before_exit(&mut self) -> ExitChoice {
            self.asked.push("exit".into());
            self.exit_choice.unwrap_or(ExitChoice::Cancel)
        }

        fn report_error(&mut self, _title: &str, message: &str) {
            self.errors.push(message.to_string());
        }

        fn report_info(&mut self, _title: &str, message: &str) {
            self.infos.push(message.to_string());
        }
    }

    #[test]
    fn test_placeholder_follows_store() {
        let mut shell = AppShell::new();
        assert!(shell.placeholder_visible());

        shell.store_mut().add("/tmp/a.txt");
        assert!(!shell.placeholder_visible());

        shell.store_mut().remove_all();
        assert!(shell.placeholder_visible());
    }

    #[test]
    fn test_toggle_always_on_top_notifies() {
        let now = Instant::now();
        let mut shell = AppShell::new();

        assert!(shell.toggle_always_on_top(now));
        assert!(!shell.toggle_always_on_top(now));

        let messages: Vec<&str> = shell
            .notifications()
            .active()
            .iter()
            .map(|n| n.message())
            .collect();
        assert_eq!(messages, vec![ON_TOP_ENABLED_MESSAGE, ON_TOP_DISABLED_MESSAGE]);

        shell.prune_notifications(now + crate::notifications::NOTIFICATION_DURATION);
        assert!(shell.notifications().is_empty());
    }

    #[test]
    fn test_add_via_dialog_asks_files_then_folder() {
        let mut shell = AppShell::new();
        shell.store_mut().add("/tmp/a.txt");
        let mut prompter = ScriptedPrompter {
            files: vec!["/tmp/a.txt".into(), "/tmp/b.png".into()],
            folder: Some("/tmp/dir".into()),
            ..Default::default()
        };

        assert_eq!(shell.add_via_dialog(&mut prompter), 2);
        assert_eq!(prompter.asked, vec!["files", "folder"]);
        assert_eq!(shell.store().list(), vec!["/tmp/a.txt", "/tmp/dir", "/tmp/b.png"]);
    }

    #[test]
    fn test_add_via_dialog_cancelled_is_not_an_error() {
        let mut shell = AppShell::new();
        let mut prompter = ScriptedPrompter::default();

        assert_eq!(shell.add_via_dialog(&mut prompter), 0);
        assert!(prompter.errors.is_empty());
        assert!(shell.placeholder_visible());
    }

    #[test]
    fn test_clear_requires_confirmation() {
        let mut shell = AppShell::new();
        shell.store_mut().add("/a");

        let mut prompter = ScriptedPrompter {
            confirms: VecDeque::from([false, true]),
            ..Default::default()
        };
        assert!(!shell.clear_with_confirmation(&mut prompter));
        assert_eq!(shell.store().len(), 1);

        assert!(shell.clear_with_confirmation(&mut prompter));
        assert!(shell.store().is_empty());
    }

    #[test]
    fn test_save_reuses_binding() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("ws.json");
        let mut shell = AppShell::new();
        shell.store_mut().add("/a");

        let mut prompter = ScriptedPrompter {
            save_target: Some(file.clone()),
            ..Default::default()
        };
        assert!(shell.save_workspace(&mut prompter).unwrap());
        assert_eq!(shell.binding().current(), Some(file.as_path()));

        shell.store_mut().add("/b");
        assert!(shell.save_workspace(&mut prompter).unwrap());

        let prompts = prompter.asked.iter().filter(|a| *a == "save_target").count();
        assert_eq!(prompts, 1);
        assert_eq!(fs::read_to_string(&file).unwrap(), r#"["/a","/b"]"#);
        assert_eq!(prompter.infos.len(), 2);
    }

    #[test]
    fn test_save_cancelled_writes_nothing() {
        let mut shell = AppShell::new();
        let mut prompter = ScriptedPrompter::default();

        assert!(!shell.save_workspace(&mut prompter).unwrap());
        assert!(!shell.binding().is_bound());
        assert!(prompter.infos.is_empty());
    }

    #[test]
    fn test_load_error_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = AppShell::new();
        shell.store_mut().add("/keep");
        let mut prompter = ScriptedPrompter {
            workspace: Some(dir.path().join("missing.json")),
            ..Default::default()
        };

        let err = shell.load_workspace(&mut prompter).unwrap_err();
        assert!(matches!(err, WorkspaceError::NotFound { .. }));
        assert_eq!(prompter.errors.len(), 1);
        assert_eq!(shell.store().list(), vec!["/keep"]);
    }

    #[test]
    fn test_close_cancel_keeps_window_open() {
        let mut shell = AppShell::new();
        shell.store_mut().add("/a");
        let mut prompter = ScriptedPrompter {
            exit_choice: Some(ExitChoice::Cancel),
            ..Default::default()
        };

        assert_eq!(shell.on_close_request(&mut prompter), CloseDecision::Cancel);
        assert_eq!(prompter.asked, vec!["exit"]);
        assert_eq!(shell.store().list(), vec!["/a"]);
    }

    #[test]
    fn test_close_discard_proceeds_without_saving() {
        let mut shell = AppShell::new();
        shell.store_mut().add("/a");
        let mut prompter = ScriptedPrompter {
            exit_choice: Some(ExitChoice::Discard),
            ..Default::default()
        };

        assert_eq!(shell.on_close_request(&mut prompter), CloseDecision::Proceed);
        assert!(!shell.binding().is_bound());
    }

    #[test]
    fn test_close_save_failure_keeps_window_open() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = AppShell::new();
        shell.store_mut().add("/a");
        let mut prompter = ScriptedPrompter {
            exit_choice: Some(ExitChoice::Save),
            save_target: Some(dir.path().join("missing-dir").join("out.json")),
            ..Default::default()
        };

        assert_eq!(shell.on_close_request(&mut prompter), CloseDecision::Cancel);
        assert_eq!(prompter.errors.len(), 1);
    }

    #[test]
    fn test_startup_declined_skips_load() {
        let mut shell = AppShell::new();
        let mut prompter = ScriptedPrompter {
            confirms: VecDeque::from([false]),
            workspace: Some("/unused.json".into()),
            ..Default::default()
        };

        assert!(!shell.on_startup(&mut prompter).unwrap());
        assert_eq!(prompter.asked, vec!["confirm:Load Workspace"]);
    }
}

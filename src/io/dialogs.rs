//! Native modal dialogs backed by `rfd`.
//!
//! Every call blocks the event loop until the user answers, which is the
//! modal behaviour the core expects from a [`Prompter`].

use filo::{ExitChoice, Prompter};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::path::{Path, PathBuf};

const WORKSPACE_FILTER_NAME: &str = "JSON Files";
const WORKSPACE_EXTENSIONS: &[&str] = &["json"];
const DEFAULT_WORKSPACE_NAME: &str = "workspace.json";

/// Prompter that shows the platform's own dialogs.
#[derive(Debug, Default)]
pub struct RfdPrompter {
    /// Starting directory for the workspace dialogs
    workspace_dir: Option<PathBuf>,
}

impl RfdPrompter {
    pub fn new(workspace_dir: Option<PathBuf>) -> Self {
        Self { workspace_dir }
    }

    /// Updates the starting directory for the workspace dialogs.
    pub fn set_workspace_dir(&mut self, dir: Option<&Path>) {
        self.workspace_dir = dir.map(Path::to_path_buf);
    }

    /// Base dialog for workspace files, opened in the last used directory
    /// or the user's documents folder.
    fn workspace_dialog(&self, title: &str) -> FileDialog {
        let mut dialog = FileDialog::new()
            .set_title(title)
            .add_filter(WORKSPACE_FILTER_NAME, WORKSPACE_EXTENSIONS);

        let start = self
            .workspace_dir
            .clone()
            .or_else(dirs::document_dir)
            .or_else(dirs::home_dir);
        if let Some(dir) = start {
            dialog = dialog.set_directory(dir);
        }
        dialog
    }

    fn message(level: MessageLevel, title: &str, message: &str, buttons: MessageButtons) -> MessageDialogResult {
        MessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(message)
            .set_buttons(buttons)
            .show()
    }
}

impl Prompter for RfdPrompter {
    fn pick_files(&mut self) -> Vec<PathBuf> {
        FileDialog::new()
            .set_title("Select Files")
            .pick_files()
            .unwrap_or_default()
    }

    fn pick_folder(&mut self) -> Option<PathBuf> {
        FileDialog::new().set_title("Select Folder").pick_folder()
    }

    fn pick_save_target(&mut self) -> Option<PathBuf> {
        self.workspace_dialog("Save Workspace")
            .set_file_name(DEFAULT_WORKSPACE_NAME)
            .save_file()
    }

    fn pick_workspace(&mut self) -> Option<PathBuf> {
        self.workspace_dialog("Open Workspace").pick_file()
    }

    fn confirm(&mut self, title: &str, message: &str) -> bool {
        let answer = Self::message(MessageLevel::Info, title, message, MessageButtons::YesNo);
        matches!(answer, MessageDialogResult::Yes)
    }

    fn ask_save_before_exit(&mut self) -> ExitChoice {
        let answer = Self::message(
            MessageLevel::Warning,
            "Save Workspace",
            "Do you want to save your workspace before exiting?",
            MessageButtons::YesNoCancel,
        );
        match answer {
            MessageDialogResult::Yes => ExitChoice::Save,
            MessageDialogResult::No => ExitChoice::Discard,
            _ => ExitChoice::Cancel,
        }
    }

    fn report_error(&mut self, title: &str, message: &str) {
        Self::message(MessageLevel::Error, title, message, MessageButtons::Ok);
    }

    fn report_info(&mut self, title: &str, message: &str) {
        Self::message(MessageLevel::Info, title, message, MessageButtons::Ok);
    }
}

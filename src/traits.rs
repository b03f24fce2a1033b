use std::io;
use std::path::{Path, PathBuf};

/// Answer to the "save before exiting?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitChoice {
    Save,
    Discard,
    Cancel,
}

/// Trait for the modal dialogs the core needs from the platform.
///
/// Every method blocks until the user answers. Cancellation is a normal
/// answer: an empty list, `None`, or `false`.
pub trait Prompter {
    /// Multi-file picker
    fn pick_files(&mut self) -> Vec<PathBuf>;

    /// Single-folder picker
    fn pick_folder(&mut self) -> Option<PathBuf>;

    /// "Save Workspace" file prompt
    fn pick_save_target(&mut self) -> Option<PathBuf>;

    /// "Open Workspace" file prompt
    fn pick_workspace(&mut self) -> Option<PathBuf>;

    /// Yes/No question, true on Yes
    fn confirm(&mut self, title: &str, message: &str) -> bool;

    /// Three-way Save/Discard/Cancel question shown before the window closes
    fn ask_save_before_exit(&mut self) -> ExitChoice;

    fn report_error(&mut self, title: &str, message: &str);

    fn report_info(&mut self, title: &str, message: &str);
}

/// Trait for launching a path with the OS-registered default application.
///
/// Picking the platform mechanism is up to the implementation.
pub trait Launcher {
    fn open(&self, path: &Path) -> io::Result<()>;
}

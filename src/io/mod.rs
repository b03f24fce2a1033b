//! Platform collaborators: native dialogs and the default-application launcher.

pub mod dialogs;
pub mod launcher;

// Re-export commonly used types
pub use dialogs::RfdPrompter;
pub use launcher::SystemLauncher;

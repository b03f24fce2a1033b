pub mod error;
pub mod interaction;
pub mod notifications;
pub mod path_store;
pub mod shell;
pub mod traits;
pub mod workspace;

// Export collaborator traits
pub use traits::{ExitChoice, Launcher, Prompter};

// Export error types
pub use error::{OpenError, WorkspaceError};

// Export the path collection
pub use path_store::{PathEntry, PathStore, IMAGE_EXTENSIONS};

// Export workspace persistence
pub use workspace::{WorkspaceBinding, WorkspacePersistence};

// Export gesture handling
pub use interaction::{
    DragPayload, DropDecision, ExportPayload, InteractionController,
    MenuAction, MenuEntry, MenuOutcome,
};

// Export window-level state
pub use shell::{AppShell, CloseDecision, PLACEHOLDER_HINT, PLACEHOLDER_TITLE};
pub use notifications::{Notification, Notifications, NOTIFICATION_DURATION};

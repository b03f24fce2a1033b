//! Application-level modules for the Filo window.
//!
//! This module contains the application coordinator and centralized state management.

mod app_state;
mod application_coordinator;
mod style_coordinator;
mod settings_coordinator;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
pub use style_coordinator::StyleCoordinator;
pub use settings_coordinator::{SettingsCoordinator, LAST_WORKSPACE_DIR_KEY};

pub(crate) use style_coordinator::{DROP_HIGHLIGHT, PLACEHOLDER_TEXT, SELECTION};

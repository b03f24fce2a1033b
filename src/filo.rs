//! Filo GUI Application
//!
//! A file clipboard: collect files and folders by dragging them onto the
//! window or picking them, reorder them, open them with the default
//! application, and save the list as a workspace for later.
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state, coordination and preferences
//! - `io/` - Native dialogs and the default-application launcher
//! - `state/` - Presentation state (row selection)
//! - `ui/` - Panel rendering and input translation
//! - `utils/` - Formatting helpers
//!
//! All list, workspace and window-state logic lives in the `filo` library.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::anyhow;
use eframe::egui;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

mod utils;
mod io;
mod app;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, StyleCoordinator, LAST_WORKSPACE_DIR_KEY};
use io::{RfdPrompter, SystemLauncher};
use ui::file_list::FileListInteraction;
use ui::panel_manager::{PanelInteraction, PanelManager};

const DEFAULT_LOG_FILTER: &str = "filo=info,eframe=warn,egui=warn";

/// Installs the stderr tracing subscriber; `RUST_LOG` overrides the default filter.
fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))
}

/// Main application entry point that initializes logging and opens the window.
fn main() -> anyhow::Result<()> {
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {e}");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([600.0, 500.0])
            .with_title("Filo")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Filo",
        options,
        Box::new(|cc| Ok(Box::new(FiloApp::new(cc)))),
    )
    .map_err(|e| anyhow!("failed to run the Filo window: {e}"))
}

/// The main Filo application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` handles menu dispatch, drops, exports and the close flow
/// - `SettingsCoordinator` handles preference persistence
/// - `PanelManager` handles panel layout and rendering
struct FiloApp {
    /// Centralized application state
    state: AppState,
    /// Native dialogs
    prompter: RfdPrompter,
    /// Default-application launcher
    launcher: SystemLauncher,
}

impl FiloApp {
    /// Creates the app, restoring preferences and offering to load a workspace
    /// before the first frame is drawn.
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        StyleCoordinator::apply(&cc.egui_ctx);
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let last_workspace_dir = SettingsCoordinator::load_setting(cc.storage, LAST_WORKSPACE_DIR_KEY);
        let mut state = AppState::with_workspace_dir(last_workspace_dir);
        let mut prompter = RfdPrompter::new(state.last_workspace_dir.clone());

        ApplicationCoordinator::run_startup(&mut state, &mut prompter);

        Self {
            state,
            prompter,
            launcher: SystemLauncher,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        self.prompter.set_workspace_dir(self.state.last_workspace_dir.as_deref());

        match interaction {
            PanelInteraction::FilesDropped(payload) => {
                ApplicationCoordinator::handle_files_dropped(&mut self.state, &payload);
            }
            PanelInteraction::List(FileListInteraction::RowClicked { index, command, shift }) => {
                ApplicationCoordinator::handle_row_clicked(&mut self.state, index, command, shift);
            }
            PanelInteraction::List(FileListInteraction::RowDoubleClicked(index)) => {
                ApplicationCoordinator::handle_open_requested(
                    &self.state,
                    index,
                    &self.launcher,
                    &mut self.prompter,
                );
            }
            PanelInteraction::List(FileListInteraction::RowMoved { from, to }) => {
                ApplicationCoordinator::handle_reorder(&mut self.state, from, to);
            }
            PanelInteraction::List(FileListInteraction::RowDraggedOut(index)) => {
                ApplicationCoordinator::handle_export_drag(&mut self.state, index, ctx);
            }
            PanelInteraction::List(FileListInteraction::CopyRequested) => {
                ApplicationCoordinator::handle_export(&mut self.state, ctx);
            }
            PanelInteraction::List(FileListInteraction::MenuActionChosen(action)) => {
                ApplicationCoordinator::handle_menu_action(&mut self.state, action, &mut self.prompter, ctx);
            }
        }
    }
}

impl eframe::App for FiloApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_setting(storage, LAST_WORKSPACE_DIR_KEY, &self.state.last_workspace_dir);
    }

    /// Main update loop.
    ///
    /// 1. Intercept close requests for the save prompt
    /// 2. Expire notifications and schedule the next expiry
    /// 3. Render all panels via PanelManager
    /// 4. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) && !self.state.close_confirmed {
            self.prompter.set_workspace_dir(self.state.last_workspace_dir.as_deref());
            ApplicationCoordinator::handle_close_request(&mut self.state, &mut self.prompter, ctx);
        }

        let now = Instant::now();
        self.state.shell.prune_notifications(now);
        if let Some(next) = self.state.shell.notifications().next_expiry() {
            ctx.request_repaint_after(next.saturating_duration_since(now));
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &self.state) {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}

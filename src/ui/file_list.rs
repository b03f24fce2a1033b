//! File list UI rendering
//!
//! Handles the central list of tracked paths: rows with thumbnails and
//! tooltips, selection highlight, drag-reorder, drag-out export, the empty
//! placeholder and the right-click menu.

use crate::app::{AppState, DROP_HIGHLIGHT, PLACEHOLDER_TEXT, SELECTION};
use eframe::egui;
use egui::{Color32, RichText, ScrollArea, Sense, Stroke};
use filo::{InteractionController, MenuAction, PathEntry, PLACEHOLDER_HINT, PLACEHOLDER_TITLE};

/// Edge length of image thumbnails in points
const THUMBNAIL_SIZE: f32 = 64.0;

/// Result of user interaction with the file list
pub enum FileListInteraction {
    /// A row was clicked, with the modifiers held at the time
    RowClicked {
        index: usize,
        command: bool,
        shift: bool,
    },
    /// A row was double-clicked
    RowDoubleClicked(usize),
    /// A row was dragged onto another row
    RowMoved { from: usize, to: usize },
    /// A row drag ended outside the list
    RowDraggedOut(usize),
    /// Copy shortcut pressed with a selection
    CopyRequested,
    /// An entry of the context menu was chosen
    MenuActionChosen(MenuAction),
}

/// Renders the file list filling the available space
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `accepting_drop` - Whether an OS drag hovering the window passed the gate
///
/// # Returns
/// * `Option<FileListInteraction>` - User interaction result
pub fn render_file_list(
    ui: &mut egui::Ui,
    state: &AppState,
    accepting_drop: bool,
) -> Option<FileListInteraction> {
    let mut interaction = None;
    let list_rect = ui.available_rect_before_wrap();

    // Rows are added later and take precedence; this catches the empty area.
    let background = ui.interact(list_rect, ui.id().with("file_list_background"), Sense::click());
    show_context_menu(&background, state, &mut interaction);

    if state.shell.placeholder_visible() {
        render_placeholder(ui, list_rect);
    } else {
        ScrollArea::vertical()
            .id_salt("file_list_scroll")
            .auto_shrink([false, false])
            .scroll_source(egui::scroll_area::ScrollSource {
                drag: false,
                ..Default::default()
            })
            .show(ui, |ui| {
                for (index, entry) in state.shell.store().entries().enumerate() {
                    render_row(ui, state, index, entry, list_rect, &mut interaction);
                }
            });
    }

    if accepting_drop {
        ui.painter().rect_stroke(
            list_rect.shrink(1.0),
            4.0,
            Stroke::new(2.0, DROP_HIGHLIGHT),
            egui::StrokeKind::Inside,
        );
    }

    let copy_pressed = ui.input(|i| i.events.iter().any(|e| matches!(e, egui::Event::Copy)));
    if copy_pressed && !state.selection.is_empty() {
        interaction = Some(FileListInteraction::CopyRequested);
    }

    interaction
}

fn render_placeholder(ui: &mut egui::Ui, rect: egui::Rect) {
    ui.vertical_centered(|ui| {
        ui.add_space((rect.height() / 2.0 - 24.0).max(0.0));
        ui.add(
            egui::Label::new(RichText::new(PLACEHOLDER_TITLE).size(16.0).color(PLACEHOLDER_TEXT))
                .selectable(false),
        );
        ui.add(
            egui::Label::new(RichText::new(PLACEHOLDER_HINT).small().color(PLACEHOLDER_TEXT))
                .selectable(false),
        );
    });
}

fn render_row(
    ui: &mut egui::Ui,
    state: &AppState,
    index: usize,
    entry: &PathEntry,
    list_rect: egui::Rect,
    interaction: &mut Option<FileListInteraction>,
) {
    let fill = if state.selection.is_selected(index) {
        SELECTION
    } else {
        Color32::TRANSPARENT
    };

    let frame = egui::Frame::default()
        .fill(fill)
        .corner_radius(2.0)
        .inner_margin(egui::Margin::symmetric(6, 4))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                if entry.is_image() {
                    ui.add(
                        egui::Image::new(format!("file://{}", entry.path()))
                            .max_size(egui::vec2(THUMBNAIL_SIZE, THUMBNAIL_SIZE)),
                    );
                }
                ui.add(egui::Label::new(entry.path()).selectable(false).truncate());
            });
        });

    let rect = frame.response.rect;
    let response = ui.interact(rect, ui.id().with(("file_row", index)), Sense::click_and_drag());

    // Internal reorder: the payload is the dragged row's index
    response.dnd_set_drag_payload(index);
    if let Some(from) = response.dnd_release_payload::<usize>() {
        if *from != index {
            *interaction = Some(FileListInteraction::RowMoved { from: *from, to: index });
        }
    } else if let Some(from) = response.dnd_hover_payload::<usize>() {
        if *from != index {
            let y = if *from < index { rect.bottom() } else { rect.top() };
            ui.painter()
                .hline(rect.x_range(), y, Stroke::new(2.0, DROP_HIGHLIGHT));
        }
    }

    if response.drag_stopped() {
        let released_inside = ui
            .ctx()
            .pointer_latest_pos()
            .is_some_and(|pos| list_rect.contains(pos));
        if !released_inside {
            *interaction = Some(FileListInteraction::RowDraggedOut(index));
        }
    }

    if response.double_clicked() {
        *interaction = Some(FileListInteraction::RowDoubleClicked(index));
    } else if response.clicked() {
        let modifiers = ui.input(|i| i.modifiers);
        *interaction = Some(FileListInteraction::RowClicked {
            index,
            command: modifiers.command,
            shift: modifiers.shift,
        });
    }

    show_context_menu(&response, state, interaction);
    response.on_hover_text(entry.tooltip());
}

fn show_context_menu(
    response: &egui::Response,
    state: &AppState,
    interaction: &mut Option<FileListInteraction>,
) {
    response.context_menu(|ui| {
        for item in InteractionController::context_menu(&state.shell) {
            if ui.button(item.label).clicked() {
                *interaction = Some(FileListInteraction::MenuActionChosen(item.action));
                ui.close();
            }
        }
    });
}

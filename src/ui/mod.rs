//! UI panel rendering subsystem
//!
//! This module contains all UI rendering logic for the Filo window:
//! - File list (rows, placeholder, reorder, context menu)
//! - Status bar (item count, workspace binding)
//! - Toast overlay (transient notifications)
//! - Panel manager (panel orchestration and OS drag-and-drop input)

pub mod file_list;
pub mod status_bar;
pub mod toast_overlay;
pub mod panel_manager;

//! Text formatting utilities for the Filo window.
//!
//! This module provides helper functions for the status bar and toasts.

use std::path::Path;

/// Formats an item count with the right plural.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_item_count(1), "1 item");
/// assert_eq!(format_item_count(3), "3 items");
/// ```
pub fn format_item_count(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}

/// Describes the workspace binding for the status bar.
pub fn format_binding(path: Option<&Path>) -> String {
    match path {
        Some(path) => format!("Workspace: {}", path.display()),
        None => "Workspace: not saved".to_string(),
    }
}

/// Toast text after exporting entries to the clipboard.
pub fn format_copied(count: usize) -> String {
    format!("Copied {}", format_item_count(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_count_plural() {
        assert_eq!(format_item_count(0), "0 items");
        assert_eq!(format_item_count(1), "1 item");
        assert_eq!(format_item_count(12), "12 items");
    }

    #[test]
    fn test_binding_text() {
        assert_eq!(format_binding(None), "Workspace: not saved");
        assert_eq!(
            format_binding(Some(Path::new("/tmp/ws.json"))),
            "Workspace: /tmp/ws.json"
        );
    }

    #[test]
    fn test_copied_text() {
        assert_eq!(format_copied(2), "Copied 2 items");
    }
}

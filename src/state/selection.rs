//! List selection state management.
//!
//! This module encapsulates which rows of the file list are selected and the
//! anchor used for range selection.

use std::collections::BTreeSet;

/// State related to row selection in the file list.
///
/// Responsibilities:
/// - Tracking selected row indices
/// - Tracking the anchor row for Shift-click ranges
/// - Providing intent-revealing selection queries
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Selected row indices, kept sorted
    selected: BTreeSet<usize>,
    /// Row the last plain or Ctrl-click landed on
    anchor: Option<usize>,
}

impl SelectionState {
    /// Creates a new selection state with nothing selected.
    pub fn new() -> Self {
        Self {
            selected: BTreeSet::new(),
            anchor: None,
        }
    }

    /// Clears all selection state.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.anchor = None;
    }

    // ===== Selection Queries =====

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Returns the selected indices in ascending order.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    // ===== Selection Mutations =====

    /// Selects a single row, dropping any previous selection.
    pub fn select_only(&mut self, index: usize) {
        self.selected.clear();
        self.selected.insert(index);
        self.anchor = Some(index);
    }

    /// Adds or removes a row (Ctrl/Cmd-click).
    pub fn toggle(&mut self, index: usize) {
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
        self.anchor = Some(index);
    }

    /// Selects every row between the anchor and `index` (Shift-click).
    ///
    /// Without an anchor this behaves like `select_only`.
    pub fn extend_to(&mut self, index: usize) {
        match self.anchor {
            Some(anchor) => {
                let (lo, hi) = if anchor <= index { (anchor, index) } else { (index, anchor) };
                self.selected = (lo..=hi).collect();
            }
            None => self.select_only(index),
        }
    }
}

//! Ordered, duplicate-free collection of tracked file and folder paths.

use std::path::Path;

/// Extensions (lowercase) that get a thumbnail instead of a plain row.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "bmp"];

/// A single tracked file or folder.
///
/// The path string is kept exactly as it was supplied; display metadata is
/// derived on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    path: String,
}

impl PathEntry {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// The path string as supplied.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns true if the extension marks this entry as an image.
    ///
    /// The comparison is case-insensitive, so `photo.JPG` counts.
    pub fn is_image(&self) -> bool {
        Path::new(&self.path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                IMAGE_EXTENSIONS.contains(&ext.as_str())
            })
            .unwrap_or(false)
    }

    /// Parent directory of the entry, empty when there is none.
    pub fn parent_dir(&self) -> String {
        Path::new(&self.path)
            .parent()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Hover text shown for the entry.
    pub fn tooltip(&self) -> String {
        format!("Path: {}", self.parent_dir())
    }
}

/// Insertion-ordered store of path entries.
///
/// Invariant: no two entries share the same path string. Paths are compared
/// literally, so `./a` and `a` are distinct.
#[derive(Debug, Clone, Default)]
pub struct PathStore {
    entries: Vec<PathEntry>,
}

impl PathStore {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends `path` unless it is already present.
    ///
    /// Returns whether the entry was inserted.
    pub fn add(&mut self, path: impl Into<String>) -> bool {
        let path = path.into();
        if self.contains(&path) {
            return false;
        }
        self.entries.push(PathEntry::new(path));
        true
    }

    /// Removes every entry.
    pub fn remove_all(&mut self) {
        self.entries.clear();
    }

    /// Moves the entry at `from` so that it ends up at position `to`.
    ///
    /// Does nothing and returns false when either index is out of bounds.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let len = self.entries.len();
        if from >= len || to >= len {
            return false;
        }
        if from != to {
            let entry = self.entries.remove(from);
            self.entries.insert(to, entry);
        }
        true
    }

    /// All path strings in display order.
    pub fn list(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.path.clone()).collect()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.iter().any(|e| e.path == path)
    }

    pub fn get(&self, index: usize) -> Option<&PathEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> impl Iterator<Item = &PathEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_of(paths: &[&str]) -> PathStore {
        let mut store = PathStore::new();
        for p in paths {
            store.add(*p);
        }
        store
    }

    #[test]
    fn test_add_keeps_first_insertion_order() {
        let mut store = PathStore::new();
        assert!(store.add("/tmp/a.txt"));
        assert!(store.add("/tmp/b.png"));
        assert!(!store.add("/tmp/a.txt"));
        assert!(store.add("/tmp/c"));
        assert!(!store.add("/tmp/b.png"));

        assert_eq!(store.list(), vec!["/tmp/a.txt", "/tmp/b.png", "/tmp/c"]);
    }

    #[test]
    fn test_dedup_is_literal() {
        let mut store = PathStore::new();
        assert!(store.add("a"));
        assert!(store.add("./a"));
        assert!(store.add("A"));
        assert_eq!(store.len(), 3);
        assert!(store.contains("./a"));
        assert!(!store.contains("a/"));
    }

    #[test]
    fn test_reorder_moves_forward_and_back() {
        let mut store = store_of(&["a", "b", "c", "d"]);

        assert!(store.reorder(0, 2));
        assert_eq!(store.list(), vec!["b", "c", "a", "d"]);

        assert!(store.reorder(3, 0));
        assert_eq!(store.list(), vec!["d", "b", "c", "a"]);

        assert!(store.reorder(1, 1));
        assert_eq!(store.list(), vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn test_reorder_out_of_bounds_is_noop() {
        let mut store = store_of(&["a", "b", "c"]);

        assert!(!store.reorder(3, 0));
        assert!(!store.reorder(0, 3));
        assert!(!store.reorder(usize::MAX, 1));
        assert_eq!(store.list(), vec!["a", "b", "c"]);

        let mut empty = PathStore::new();
        assert!(!empty.reorder(0, 0));
        assert!(empty.is_empty());
    }

    #[test]
    fn test_remove_all_then_add() {
        let mut store = store_of(&["a", "b"]);
        store.remove_all();
        assert!(store.is_empty());
        assert!(store.add("a"));
        assert_eq!(store.list(), vec!["a"]);
    }

    #[test]
    fn test_image_classification() {
        assert!(PathEntry::new("/photos/cat.jpg").is_image());
        assert!(PathEntry::new("/photos/cat.JPEG").is_image());
        assert!(PathEntry::new("shot.Png").is_image());
        assert!(PathEntry::new("anim.gif").is_image());
        assert!(PathEntry::new("old.bmp").is_image());
        assert!(!PathEntry::new("/docs/report.pdf").is_image());
        assert!(!PathEntry::new("/photos").is_image());
        assert!(!PathEntry::new("/photos/.png").is_image());
    }

    #[test]
    fn test_tooltip_shows_parent_directory() {
        assert_eq!(PathEntry::new("/tmp/a.txt").tooltip(), "Path: /tmp");
        assert_eq!(PathEntry::new("a.txt").tooltip(), "Path: ");
    }
}

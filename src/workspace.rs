//! Workspace files: the path list as a JSON array of strings.
//!
//! A workspace file has no wrapper or version field, e.g.
//! `["/tmp/a.txt","/tmp/b.png"]`. Writes are not atomic; a failure part way
//! through can leave a truncated file behind.

use crate::error::WorkspaceError;
use crate::path_store::PathStore;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The workspace file currently associated with the window, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceBinding {
    path: Option<PathBuf>,
}

impl WorkspaceBinding {
    pub fn new() -> Self {
        Self { path: None }
    }

    pub fn current(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_bound(&self) -> bool {
        self.path.is_some()
    }

    pub fn bind(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }
}

/// Reads and writes workspace files.
pub struct WorkspacePersistence;

impl WorkspacePersistence {
    /// Encodes a path list in the on-disk format.
    pub fn encode(paths: &[String]) -> Result<String, WorkspaceError> {
        serde_json::to_string(paths).map_err(WorkspaceError::Serialization)
    }

    /// Decodes the on-disk format. `source` only labels the error.
    ///
    /// Input that is not UTF-8 is a parse error, like any other malformed content.
    pub fn decode(bytes: &[u8], source: &Path) -> Result<Vec<String>, WorkspaceError> {
        serde_json::from_slice(bytes).map_err(|e| WorkspaceError::Parse {
            path: source.to_path_buf(),
            source: e,
        })
    }

    /// Writes the store's paths to `target` and binds the workspace to it.
    ///
    /// The binding only changes when the write succeeded.
    pub fn save(
        store: &PathStore,
        binding: &mut WorkspaceBinding,
        target: &Path,
    ) -> Result<(), WorkspaceError> {
        let encoded = Self::encode(&store.list())?;
        fs::write(target, encoded).map_err(|e| WorkspaceError::Io {
            path: target.to_path_buf(),
            source: e,
        })?;

        binding.bind(target);
        info!(path = %target.display(), entries = store.len(), "workspace saved");
        Ok(())
    }

    /// Replaces the store's contents with the paths listed in `source`.
    ///
    /// Duplicate paths in the file are skipped. On any error the store and
    /// binding are left as they were. Returns the paths now in the store.
    pub fn load(
        store: &mut PathStore,
        binding: &mut WorkspaceBinding,
        source: &Path,
    ) -> Result<Vec<String>, WorkspaceError> {
        let bytes = fs::read(source).map_err(|e| match e.kind() {
            ErrorKind::NotFound => WorkspaceError::NotFound {
                path: source.to_path_buf(),
            },
            _ => WorkspaceError::Io {
                path: source.to_path_buf(),
                source: e,
            },
        })?;
        let paths = Self::decode(&bytes, source)?;

        store.remove_all();
        let mut skipped = 0;
        for path in paths {
            if !store.add(path) {
                skipped += 1;
            }
        }
        if skipped > 0 {
            debug!(skipped, "ignored duplicate paths in workspace file");
        }

        binding.bind(source);
        info!(path = %source.display(), entries = store.len(), "workspace loaded");
        Ok(store.list())
    }
}

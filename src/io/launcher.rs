//! Opening entries with the OS-registered default application.

use filo::Launcher;
use std::io;
use std::path::Path;

/// Launches paths through the `open` crate (`xdg-open`, `open`, `start`).
///
/// The handler is spawned detached so a long-running viewer does not hold up
/// the event loop.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open(&self, path: &Path) -> io::Result<()> {
        open::that_detached(path)
    }
}

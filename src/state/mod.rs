//! State management modules for the Filo front end.
//!
//! The path list itself lives in `filo::AppShell`; this module only holds
//! presentation state the core does not care about:
//! - Selection state (selected rows, range anchor)

mod selection;

pub use selection::SelectionState;

//! Utility modules for the Filo window.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_binding, format_copied, format_item_count};

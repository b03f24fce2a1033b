//! Preference persistence coordination.
//!
//! Stores small preferences in eframe's persistent storage as JSON strings.
//! Session state (the path list, the workspace binding, always-on-top) is
//! deliberately not stored here.

use serde::{Deserialize, Serialize};

/// Storage key for the directory of the last saved or loaded workspace.
pub const LAST_WORKSPACE_DIR_KEY: &str = "last_workspace_dir";

/// Coordinates preference persistence.
///
/// Values are serialized with serde_json; anything missing or unreadable
/// falls back to the type's default.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage with a default fallback.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    ///
    /// # Examples
    /// ```ignore
    /// let dir: Option<PathBuf> = SettingsCoordinator::load_setting(
    ///     cc.storage,
    ///     LAST_WORKSPACE_DIR_KEY,
    /// );
    /// ```
    pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        storage
            .and_then(|storage| storage.get_string(key))
            .and_then(|json_str| serde_json::from_str(&json_str).ok())
            .unwrap_or_default()
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
            storage.flush();
        }
    }
}

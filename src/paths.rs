//! Config location helpers.

use std::path::PathBuf;

/// Arena registry file location.
///
/// Uses `TA_CONFIG` if set, otherwise `$XDG_CONFIG_HOME/taskarena/arenas.json`
/// (or the platform equivalent).
pub fn registry_path() -> PathBuf {
    if let Ok(path) = std::env::var("TA_CONFIG")
        && !path.trim().is_empty()
    {
        return PathBuf::from(path);
    }

    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskarena")
        .join("arenas.json")
}

//! JSON file helpers for the ~/.dino-runner/ directory.
//!
//! Only configuration is read from here. Scores are never written to disk.

use crate::core::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};
use crate::core::config::GameConfig;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the ~/.dino-runner/ directory path, creating it if needed.
pub fn app_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(APP_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.dino-runner/.
pub fn app_path(filename: &str) -> io::Result<PathBuf> {
    Ok(app_dir()?.join(filename))
}

/// Load a JSON file, returning `T::default()` if it is missing or invalid.
///
/// A file that exists but does not parse is reported at `warn`.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return T::default(),
        Err(e) => {
            log::warn!("Could not read {}: {}", path.display(), e);
            return T::default();
        }
    };
    serde_json::from_str(&json).unwrap_or_else(|e| {
        log::warn!("Ignoring malformed {}: {}", path.display(), e);
        T::default()
    })
}

/// Load the user's config, falling back to defaults for anything missing
/// or invalid.
pub fn load_config() -> GameConfig {
    match app_path(CONFIG_FILE_NAME) {
        Ok(path) => load_json_or_default::<GameConfig>(&path).validated_or_default(),
        Err(e) => {
            log::warn!("No config directory ({}), using defaults", e);
            GameConfig::default()
        }
    }
}

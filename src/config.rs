//! User preferences stored in `settings.toml`
//!
//! Linux: ~/.config/photo-gallery/settings.toml
//! macOS: ~/Library/Application Support/photo-gallery/settings.toml
//! Windows: %APPDATA%\photo-gallery\settings.toml
//!
//! A missing file means defaults; an unreadable or unparsable file is
//! logged and also falls back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{GalleryError, Result};
use crate::state::paging::PAGE_STEP;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "photo-gallery";

pub const DEFAULT_COLUMNS: usize = 3;
pub const DEFAULT_TILE_SIZE: f32 = 220.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Photos shown before the first "Load More"
    pub initial_load_count: usize,
    /// Tiles per row
    pub columns: usize,
    /// Tile edge length in logical pixels
    pub tile_size: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_load_count: PAGE_STEP,
            columns: DEFAULT_COLUMNS,
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Load settings from the user config directory
pub fn load() -> Settings {
    match default_config_path() {
        Some(path) if path.exists() => load_from_path(&path),
        _ => Settings::default(),
    }
}

/// Load settings from an explicit path, falling back to defaults
pub fn load_from_path(path: &Path) -> Settings {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read settings, using defaults");
            return Settings::default();
        }
    };
    toml::from_str(&content).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "invalid settings, using defaults");
        Settings::default()
    })
}

/// Save settings to the user config directory
pub fn save(settings: &Settings) -> Result<()> {
    match default_config_path() {
        Some(path) => save_to_path(settings, &path),
        None => Ok(()),
    }
}

pub fn save_to_path(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| GalleryError::io(parent, e))?;
    }
    let content = toml::to_string_pretty(settings)?;
    fs::write(path, content).map_err(|e| GalleryError::io(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip() {
        let settings = Settings {
            initial_load_count: 9,
            columns: 4,
            tile_size: 180.0,
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join(CONFIG_FILE);

        save_to_path(&settings, &path).expect("failed to save settings");
        assert_eq!(load_from_path(&path), settings);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "columns = 2\n").unwrap();

        let settings = load_from_path(&path);
        assert_eq!(settings.columns, 2);
        assert_eq!(settings.initial_load_count, PAGE_STEP);
        assert_eq!(settings.tile_size, DEFAULT_TILE_SIZE);
    }

    #[test]
    fn invalid_toml_falls_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "columns = [").unwrap();

        assert_eq!(load_from_path(&path), Settings::default());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        assert_eq!(
            load_from_path(&temp_dir.path().join("absent.toml")),
            Settings::default()
        );
    }
}

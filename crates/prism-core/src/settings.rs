//! Persisted editor settings.
//!
//! A single JSON object at a fixed per-user path. Persistence is
//! best-effort: a missing or corrupt file loads as defaults, and save
//! failures are for the caller to log and ignore; settings must never
//! block editing.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Editor settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Folder the last open/save dialog landed in.
    pub last_folder: Option<PathBuf>,
}

impl Settings {
    /// Loads settings from the default location, falling back to
    /// defaults on any failure.
    pub fn load() -> Self {
        match Self::default_path().and_then(|path| Self::load_from(&path)) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::debug!(%err, "settings not loaded, using defaults");
                Self::default()
            }
        }
    }

    /// Loads settings from a file.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Saves the settings to the default location.
    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&Self::default_path()?)
    }

    /// Saves the settings to a file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the per-user settings file path.
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        let config_dir = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
        Ok(config_dir.join("prism").join("settings.json"))
    }

    /// Records the folder containing `file` as the last-used folder.
    pub fn remember_folder(&mut self, file: &Path) {
        if let Some(parent) = file.parent() {
            self.last_folder = Some(parent.to_path_buf());
        }
    }
}

/// Settings errors.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = Settings::default();
        settings.last_folder = Some(PathBuf::from("/tmp/json"));
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.last_folder, Some(PathBuf::from("/tmp/json")));
    }

    #[test]
    fn test_missing_file_is_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Settings::load_from(&dir.path().join("nope.json")).unwrap();
        assert!(loaded.last_folder.is_none());
    }

    #[test]
    fn test_corrupt_file_is_an_error_not_a_panic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ last_folder:").unwrap();
        assert!(Settings::load_from(&path).is_err());
    }

    #[test]
    fn test_unknown_fields_are_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"last_folder":"/x","theme":"dark"}"#).unwrap();
        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.last_folder, Some(PathBuf::from("/x")));
    }

    #[test]
    fn test_remember_folder_takes_parent() {
        let mut settings = Settings::default();
        settings.remember_folder(Path::new("/data/files/doc.json"));
        assert_eq!(settings.last_folder, Some(PathBuf::from("/data/files")));
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        Settings::default().save_to(&path).unwrap();
        assert!(path.exists());
    }
}

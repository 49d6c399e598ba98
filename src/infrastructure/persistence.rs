use crate::domain::{Portfolio, Theme};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_PREFS_FILE: &str = "folio_prefs.json";
pub const DEFAULT_CONTENT_FILE: &str = "folio.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(default)]
    theme: Theme,
}

/// Durable store for the theme preference: a JSON file holding the single
/// `theme` key. A missing or unreadable file means no preference.
#[derive(Debug, Clone)]
pub struct PreferenceRepository {
    path: PathBuf,
}

impl Default for PreferenceRepository {
    fn default() -> Self {
        Self { path: PathBuf::from(DEFAULT_PREFS_FILE) }
    }
}

impl PreferenceRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the stored theme, falling back to light when nothing usable
    /// is on disk.
    pub fn load_theme(&self) -> Theme {
        match fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str::<Preferences>(&content)
                .map(|prefs| prefs.theme)
                .unwrap_or_default(),
            Err(_) => Theme::default(),
        }
    }

    /// Writes the theme; called on every explicit toggle.
    pub fn save_theme(&self, theme: Theme) -> Result<(), String> {
        match serde_json::to_string_pretty(&Preferences { theme }) {
            Ok(json) => fs::write(&self.path, json).map_err(|e| e.to_string()),
            Err(e) => Err(format!("Serialization failed: {}", e)),
        }
    }
}

pub struct ContentRepository;

impl ContentRepository {
    /// Loads portfolio content from a JSON file with the same shape as
    /// the built-in defaults.
    pub fn load_portfolio(filename: &str) -> Result<(Portfolio, String), String> {
        match fs::read_to_string(filename) {
            Ok(content) => match serde_json::from_str::<Portfolio>(&content) {
                Ok(portfolio) => Ok((portfolio, filename.to_string())),
                Err(e) => Err(format!("Invalid file format - {}", e)),
            },
            Err(e) => Err(e.to_string()),
        }
    }
}

//! Interactive host preferences and their persistence.

use crate::error::Result;
use directories::ProjectDirs;
use eframe::egui::Color32;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User-configurable host settings persisted between sessions.
///
/// Settings are stored as JSON in the user's config directory
/// (e.g., `~/.config/rubberband/settings.json` on Linux).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Deep candidate traversal.
    pub deep: bool,
    /// Outline colour of highlighted elements, as RGBA.
    pub highlight: [u8; 4],
    /// Fill colour of the selection box, as RGBA.
    #[serde(default = "default_box_fill")]
    pub box_fill: [u8; 4],
}

fn default_box_fill() -> [u8; 4] {
    [0, 153, 255, 48]
}

impl Settings {
    /// Returns the path to the settings file.
    ///
    /// Creates the config directory if it doesn't exist.
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "rubberband", "rubberband").map(|dirs| {
            let config_dir = dirs.config_dir();
            if !config_dir.exists() {
                let _ = fs::create_dir_all(config_dir);
            }
            config_dir.join("settings.json")
        })
    }

    /// Loads settings from disk, falling back to defaults if not found.
    ///
    /// # Arguments
    /// * `deep` - Traversal mode to use if no settings file exists.
    pub fn load(deep: bool) -> Self {
        Self::config_path()
            .and_then(|path| fs::read_to_string(&path).ok())
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_else(|| Self::with_defaults(deep))
    }

    /// Creates default settings with the given traversal mode.
    pub fn with_defaults(deep: bool) -> Self {
        Self {
            deep,
            highlight: [0, 153, 255, 128],
            box_fill: default_box_fill(),
        }
    }

    /// Persists settings to disk.
    ///
    /// # Errors
    /// Returns an error if serialization or file writing fails.
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            let json = serde_json::to_string_pretty(self)?;
            fs::write(path, json)?;
        }
        Ok(())
    }

    pub fn highlight_color(&self) -> Color32 {
        let [r, g, b, a] = self.highlight;
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }

    pub fn box_fill_color(&self) -> Color32 {
        let [r, g, b, a] = self.box_fill;
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::with_defaults(false)
    }
}

/// User settings for the client
///
/// Stored as JSON in the user's config directory:
/// - Linux: ~/.config/instakgram/settings.json
/// - macOS: ~/Library/Application Support/instakgram/settings.json
/// - Windows: %APPDATA%\instakgram\settings.json
///
/// Every field has a default, so a partial file is valid.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::route::Route;

/// Longest edge of a decoded preview, in pixels
pub const DEFAULT_PREVIEW_MAX_EDGE: u32 = 1080;

/// Filter used when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "instakgram=info";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn theme(self) -> iced::Theme {
        match self {
            ThemeChoice::Dark => iced::Theme::Dark,
            ThemeChoice::Light => iced::Theme::Light,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Initial window width in logical pixels
    pub window_width: f32,
    /// Initial window height in logical pixels
    pub window_height: f32,
    pub theme: ThemeChoice,
    /// Previews larger than this are downscaled before display
    pub preview_max_edge: u32,
    /// Page shown at startup, e.g. "/post" to open the composer directly
    pub start_route: Route,
    /// tracing-subscriber filter directive
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 1280.0,
            window_height: 860.0,
            theme: ThemeChoice::Dark,
            preview_max_edge: DEFAULT_PREVIEW_MAX_EDGE,
            start_route: Route::Home,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    /// Get the path where the settings file should be stored
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("instakgram");
        path.push("settings.json");
        Some(path)
    }

    /// Load settings from the default location.
    ///
    /// A missing file (or no resolvable config directory) is not an error
    /// and yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write settings to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source: std::io::Error| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let json = self.to_json().map_err(ConfigError::Serialize)?;
        fs::write(path, json).map_err(write_err)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

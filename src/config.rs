//! User preferences stored in `settings.json`
//!
//! Lives in the platform config directory:
//! - Linux: ~/.config/case-studio/settings.json
//! - macOS: ~/Library/Application Support/case-studio/settings.json
//! - Windows: %APPDATA%\case-studio\settings.json

use iced::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::{Error, Result};
use crate::state::ModelId;

const CONFIG_FILE: &str = "settings.json";
const APP_DIR: &str = "case-studio";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn theme(self) -> Theme {
        match self {
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Light => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Phone model selected at startup
    #[serde(default)]
    pub default_model: Option<String>,
    #[serde(default)]
    pub theme: Option<ThemeChoice>,
    /// tracing filter directive, e.g. "debug" or "case_studio=trace"
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Config {
    /// Configured startup model, falling back to the catalog default when
    /// unset or unknown
    pub fn default_model_id(&self) -> ModelId {
        match self.default_model.as_deref() {
            None => ModelId::default(),
            Some(id) => id.parse().unwrap_or_else(|err| {
                warn!("{err} in settings, using {}", ModelId::default());
                ModelId::default()
            }),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.unwrap_or_default().theme()
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_DIR);
        path.push(CONFIG_FILE);
        path
    })
}

/// Load settings from the default location, or defaults when there are none
pub fn load() -> Result<Config> {
    match default_config_path() {
        Some(path) if path.exists() => load_from_path(&path),
        _ => Ok(Config::default()),
    }
}

/// Unparsable settings are reported and replaced by defaults
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
    Ok(serde_json::from_str(&content).unwrap_or_else(|err| {
        warn!("Ignoring invalid settings in {}: {err}", path.display());
        Config::default()
    }))
}

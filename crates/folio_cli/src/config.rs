//! Folio configuration file handling

use anyhow::{Context, Result};
use folio_core::ColorScheme;
use folio_theme::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";

/// Top-level Folio configuration (folio.toml)
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct FolioConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub animation: AnimationSettings,
}

/// Theme persistence and OS signal settings
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct ThemeConfig {
    /// Key the preference is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Preference file; defaults to the user config directory
    #[serde(default)]
    pub store_path: Option<PathBuf>,
    /// Use this instead of detecting the OS scheme
    #[serde(default)]
    pub scheme_override: Option<ColorScheme>,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            store_path: None,
            scheme_override: None,
        }
    }
}

impl ThemeConfig {
    /// Preference file location
    ///
    /// `store_path` if set, else `$XDG_CONFIG_HOME/folio/preferences.toml`,
    /// else `$HOME/.config/folio/preferences.toml`, else `.folio/preferences.toml`.
    pub fn resolved_store_path(&self) -> PathBuf {
        if let Some(path) = &self.store_path {
            return path.clone();
        }
        let config_home = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")));
        match config_home {
            Some(dir) => dir.join("folio").join("preferences.toml"),
            None => PathBuf::from(".folio").join("preferences.toml"),
        }
    }
}

/// Headless animation preview settings
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct AnimationSettings {
    /// Frame rate of the real-time ticker
    #[serde(default = "default_fps")]
    pub target_fps: u32,
    /// Fixed layout seed
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
    #[serde(default = "default_dpr")]
    pub device_pixel_ratio: f32,
}

fn default_fps() -> u32 {
    60
}

fn default_width() -> f32 {
    800.0
}

fn default_height() -> f32 {
    600.0
}

fn default_dpr() -> f32 {
    1.0
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            target_fps: default_fps(),
            seed: None,
            width: default_width(),
            height: default_height(),
            device_pixel_ratio: default_dpr(),
        }
    }
}

impl FolioConfig {
    /// Load an explicit config file, or `folio.toml` in the working directory
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file {} not found", path.display());
                }
                Self::load_from(path)
            }
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load_from(default_path)
                } else {
                    tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: FolioConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

//! Configuration module for Warble

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::paths;
use crate::theme::{Appearance, Theme};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Theme used in dark appearance
    #[serde(default)]
    pub theme: Theme,

    /// Theme used in light appearance
    #[serde(default = "default_light_theme")]
    pub light_theme: Theme,

    /// Light or dark
    #[serde(default)]
    pub appearance: Appearance,

    /// Seed file with the local user and initial posts (built-in seed if unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_path: Option<PathBuf>,

    /// Whether Ctrl+Enter clears the draft after posting
    #[serde(default)]
    pub hotkey_resets_draft: bool,

    /// Close the sidebar action sheet when clicking outside it
    #[serde(default = "default_outside_click")]
    pub sidebar_outside_click: bool,

    /// Close the header account drawer when clicking outside it
    #[serde(default = "default_outside_click")]
    pub header_outside_click: bool,

    /// Number of posts printed by `warble feed`
    #[serde(default = "default_feed_limit")]
    pub feed_limit: usize,
}

fn default_light_theme() -> Theme {
    Theme::first_light()
}

fn default_outside_click() -> bool {
    true
}

fn default_feed_limit() -> usize {
    20
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            light_theme: default_light_theme(),
            appearance: Appearance::default(),
            seed_path: None,
            hotkey_resets_draft: false,
            sidebar_outside_click: default_outside_click(),
            header_outside_click: default_outside_click(),
            feed_limit: default_feed_limit(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        paths::config_path()
    }

    /// Load config from the default path or create default
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        Self::load_from(&path)
    }

    /// Load config from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path).context("Failed to read config file")?;
            let config = toml::from_str(&content).context("Failed to parse config file")?;
            tracing::info!(path = %path.display(), "loaded config");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path()?;
        self.save_to(&path)
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Seed file to load: the configured one, else `seed.toml` in the
    /// data directory when it exists
    pub fn seed_file(&self) -> Option<PathBuf> {
        match paths::seed_path() {
            Ok(fallback) => self.seed_file_or(fallback),
            Err(_) => self.seed_path.clone(),
        }
    }

    fn seed_file_or(&self, fallback: PathBuf) -> Option<PathBuf> {
        self.seed_path
            .clone()
            .or_else(|| fallback.exists().then_some(fallback))
    }

    /// Theme for the current appearance
    pub fn active_theme(&self) -> Theme {
        match self.appearance {
            Appearance::Light => self.light_theme,
            Appearance::Dark => self.theme,
        }
    }
}

//! Common paths for Warble data
//!
//! Everything lives under ~/.config/warble/ on all platforms:
//! - config.toml - User configuration
//! - seed.toml - Optional seed data (local user and initial posts)

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the Warble data directory (~/.config/warble/), creating it if needed
pub fn warble_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let dir = home.join(".config").join("warble");
    fs::create_dir_all(&dir).context("Failed to create warble directory")?;
    Ok(dir)
}

/// Get the config file path (~/.config/warble/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(warble_dir()?.join("config.toml"))
}

/// Get the conventional seed file path (~/.config/warble/seed.toml)
pub fn seed_path() -> Result<PathBuf> {
    Ok(warble_dir()?.join("seed.toml"))
}

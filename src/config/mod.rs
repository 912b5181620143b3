//! Per-user configuration: the encrypted API key and optional settings.
//!
//! Everything lives under `~/.ipgeolocation/`.

pub mod settings;
pub mod store;

use std::path::PathBuf;

pub use settings::Settings;
pub use store::StoredConfig;

use crate::errors::{IpGeoError, Result};

/// Name of the per-user config directory inside the home directory.
const CONFIG_DIR_NAME: &str = ".ipgeolocation";

/// The user's home directory as a string (`$HOME`, then `%USERPROFILE%`).
pub fn home_dir() -> Option<String> {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .ok()
        .filter(|h| !h.is_empty())
}

/// `~/.ipgeolocation`
pub fn config_dir() -> Result<PathBuf> {
    let home = home_dir()
        .ok_or_else(|| IpGeoError::Config("cannot determine home directory".into()))?;
    Ok(PathBuf::from(home).join(CONFIG_DIR_NAME))
}

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{IpGeoError, Result};

/// Environment variable that overrides `api_base_url`.
pub const BASE_URL_ENV: &str = "IPGEOLOCATION_API_URL";

/// Optional client settings, loaded from `~/.ipgeolocation/settings.toml`.
///
/// Every field has a default so the CLI works without the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Whole-request timeout in seconds; `0` disables the timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_api_base_url() -> String {
    "https://api.ipgeolocation.io/v2".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Settings {
    /// Name of the settings file inside the config directory.
    const FILE_NAME: &'static str = "settings.toml";

    /// Load settings from `<config_dir>/settings.toml`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(config_dir: &Path) -> Result<Self> {
        let path = config_dir.join(Self::FILE_NAME);

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;

        toml::from_str(&contents)
            .map_err(|e| IpGeoError::Config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Settings for this invocation: the settings file plus env overrides.
    pub fn resolve() -> Result<Self> {
        let settings = match super::config_dir() {
            Ok(dir) => Self::load(&dir)?,
            Err(_) => Self::default(),
        };
        Ok(settings.with_base_url_override(std::env::var(BASE_URL_ENV).ok()))
    }

    /// Request timeout for the HTTP agent, `None` when `timeout_secs` is 0.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    /// Replace the base URL when an override is present and non-empty.
    pub fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.is_empty()) {
            self.api_base_url = url;
        }
        self
    }
}

// ── Tests ────────────────────────────────────────────────────────────

//! The persisted `config.json` holding the encrypted API key.
//!
//! The file is always written whole.  Two concurrent `config --apikey`
//! runs race and the last writer wins.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::crypto;
use crate::errors::{IpGeoError, Result};

/// File name of the stored config inside the config directory.
const FILE_NAME: &str = "config.json";

/// Characters of the API key shown by `config` without `--apikey`.
const VISIBLE_SUFFIX: usize = 5;

/// On-disk record: `{"apikey": "<base64 ciphertext>"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredConfig {
    #[serde(default)]
    pub apikey: String,
}

/// `~/.ipgeolocation/config.json`
pub fn config_path() -> Result<PathBuf> {
    Ok(super::config_dir()?.join(FILE_NAME))
}

/// Write the config to the default path.
pub fn save(config: &StoredConfig) -> Result<()> {
    save_to(&config_path()?, config)
}

/// Write the config to `path`, creating the parent directory if needed.
///
/// On Unix the file is restricted to owner read/write.
pub fn save_to(path: &Path, config: &StoredConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let data = serde_json::to_string_pretty(config)
        .map_err(|e| IpGeoError::Serialization(format!("config: {e}")))?;
    fs::write(path, data)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }

    tracing::debug!(path = %path.display(), "saved config");
    Ok(())
}

/// Read the config from the default path.
pub fn load() -> Result<StoredConfig> {
    load_from(&config_path()?)
}

/// Read the config from `path`.  A missing file means no key is configured.
pub fn load_from(path: &Path) -> Result<StoredConfig> {
    if !path.exists() {
        return Err(IpGeoError::ApiKeyMissing);
    }

    let data = fs::read_to_string(path)?;
    let config: StoredConfig = serde_json::from_str(&data)
        .map_err(|e| IpGeoError::Config(format!("failed to parse {}: {e}", path.display())))?;

    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Encrypt `api_key` and overwrite the stored config with it.
pub fn store_api_key(api_key: &str) -> Result<()> {
    let apikey = crypto::encrypt_string(api_key)?;
    save(&StoredConfig { apikey })
}

/// Load and decrypt the stored API key.
pub fn load_api_key() -> Result<String> {
    let config = load()?;
    decrypt_api_key(&config)
}

/// Decrypt the key held by `config`; an empty field means none is configured.
pub fn decrypt_api_key(config: &StoredConfig) -> Result<String> {
    if config.apikey.is_empty() {
        return Err(IpGeoError::ApiKeyMissing);
    }
    crypto::decrypt_string(&config.apikey)
}

/// Hide all but the last few characters of an API key.
pub fn mask_api_key(api_key: &str) -> String {
    let chars: Vec<char> = api_key.chars().collect();
    let start = chars.len().saturating_sub(VISIBLE_SUFFIX);
    let suffix: String = chars[start..].iter().collect();
    format!("********{suffix}")
}

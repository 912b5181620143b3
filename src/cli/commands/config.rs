//! `ipgeolocation config` — store or show the API key.
//!
//! With `--apikey` the key is encrypted and written to
//! `~/.ipgeolocation/config.json`, replacing whatever was there.
//! Without it the stored key is shown masked.

use clap::Args;

use crate::cli::output;
use crate::config::store;
use crate::errors::{IpGeoError, Result};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Set your ipgeolocation.io API key
    #[arg(long)]
    pub apikey: Option<String>,
}

/// Execute the `config` command.
pub fn execute(args: &ConfigArgs) -> Result<()> {
    match args.apikey.as_deref().filter(|k| !k.is_empty()) {
        Some(key) => {
            store::store_api_key(key)?;
            output::success("API key saved securely.");
            Ok(())
        }
        None => show(),
    }
}

fn show() -> Result<()> {
    match store::load_api_key() {
        Ok(key) => {
            output::info(&format!("Current API key: {}", store::mask_api_key(&key)));
            Ok(())
        }
        Err(IpGeoError::ApiKeyMissing) => {
            output::warning("No API key configured.");
            output::tip("Run `ipgeolocation config --apikey=<your-key>` to set one.");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

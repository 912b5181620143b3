//! Text-level sealing of the stored API key.
//!
//! Wraps `encryption` with base64 so the result fits in a JSON string
//! field, and keys everything with the machine-derived key.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use super::encryption;
use super::keys::{derive_key, MachineKey};
use crate::errors::{IpGeoError, Result};

/// Encrypt `plaintext` under the machine key and base64-encode it.
pub fn encrypt_string(plaintext: &str) -> Result<String> {
    encrypt_string_with(&derive_key(), plaintext)
}

/// Reverse of `encrypt_string`.
pub fn decrypt_string(stored: &str) -> Result<String> {
    decrypt_string_with(&derive_key(), stored)
}

/// Encrypt with an explicit key.
pub fn encrypt_string_with(key: &MachineKey, plaintext: &str) -> Result<String> {
    let sealed = encryption::encrypt(key.as_bytes(), plaintext.as_bytes())?;
    Ok(BASE64.encode(sealed))
}

/// Decrypt with an explicit key.
pub fn decrypt_string_with(key: &MachineKey, stored: &str) -> Result<String> {
    let sealed = BASE64
        .decode(stored)
        .map_err(|e| IpGeoError::Decode(e.to_string()))?;

    let plain = encryption::decrypt(key.as_bytes(), &sealed)?;

    // A verified tag over non-UTF-8 bytes means the blob was not written by us.
    String::from_utf8(plain).map_err(|_| IpGeoError::AuthenticationFailed)
}

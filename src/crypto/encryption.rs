//! AES-256-GCM authenticated encryption.
//!
//! Each call to `encrypt` draws a fresh random 12-byte nonce from the OS
//! and prepends it to the ciphertext.  `decrypt` splits the nonce back out
//! before verifying and decrypting.
//!
//! Layout of the returned byte buffer:
//!   [ 12-byte nonce | ciphertext + 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::errors::{IpGeoError, Result};

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Encrypt `plaintext` with a 32-byte `key`.
///
/// Returns the nonce prepended to the ciphertext (nonce || ciphertext).
pub fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| IpGeoError::EncryptionFailed(format!("invalid key length: {e}")))?;

    let mut nonce_bytes = [0u8; NONCE_LEN];
    OsRng
        .try_fill_bytes(&mut nonce_bytes)
        .map_err(|e| IpGeoError::EncryptionFailed(format!("nonce generation: {e}")))?;
    let nonce = Nonce::from_slice(&nonce_bytes);

    // No associated data.
    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|e| IpGeoError::EncryptionFailed(format!("encryption error: {e}")))?;

    let mut output = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    output.extend_from_slice(&nonce_bytes);
    output.extend_from_slice(&ciphertext);
    Ok(output)
}

/// Decrypt data that was produced by `encrypt`.
///
/// Input shorter than a nonce is `MalformedCiphertext`; anything that fails
/// tag verification (tampering, wrong key, wrong format) is
/// `AuthenticationFailed`.
pub fn decrypt(key: &[u8], ciphertext_with_nonce: &[u8]) -> Result<Vec<u8>> {
    if ciphertext_with_nonce.len() < NONCE_LEN {
        return Err(IpGeoError::MalformedCiphertext {
            len: ciphertext_with_nonce.len(),
        });
    }

    let (nonce_bytes, ciphertext) = ciphertext_with_nonce.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| IpGeoError::AuthenticationFailed)?;

    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| IpGeoError::AuthenticationFailed)
}

//! Machine-derived key for the stored API key.
//!
//! The key is SHA-256 over the user's home-directory path.  Nothing is
//! written to disk and no passphrase is involved, so the same account on
//! the same machine always re-derives the same key.
//!
//! This is obfuscation at rest, not secret isolation: any process running
//! as the same user can compute the key.  The derivation input must stay
//! the home path so previously stored keys remain readable.

use sha2::{Digest, Sha256};
use zeroize::Zeroize;

/// Length of the derived key (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// A 32-byte key that zeroes its memory when dropped.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct MachineKey {
    bytes: [u8; KEY_LEN],
}

impl MachineKey {
    /// Create a new `MachineKey` from raw bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

/// Derive the key for the current account.
///
/// When no home directory can be found the empty string is hashed, which
/// matches what earlier releases stored in that situation.
pub fn derive_key() -> MachineKey {
    let identity = crate::config::home_dir().unwrap_or_else(|| {
        tracing::warn!("no home directory found; deriving key from an empty identity");
        String::new()
    });
    derive_key_from(&identity)
}

/// Derive a key from an explicit identity string.
pub fn derive_key_from(identity: &str) -> MachineKey {
    let digest = Sha256::digest(identity.as_bytes());
    let mut bytes = [0u8; KEY_LEN];
    bytes.copy_from_slice(&digest);
    MachineKey::new(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_identity_same_key() {
        let a = derive_key_from("/home/alice");
        let b = derive_key_from("/home/alice");
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn different_identity_different_key() {
        let a = derive_key_from("/home/alice");
        let b = derive_key_from("/home/bob");
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn key_is_sha256_of_identity() {
        // sha256("") is a well-known constant.
        let key = derive_key_from("");
        assert_eq!(key.as_bytes()[..4], [0xe3, 0xb0, 0xc4, 0x42]);
    }

    #[test]
    fn derive_key_is_deterministic_in_process() {
        let a = derive_key();
        let b = derive_key();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }
}

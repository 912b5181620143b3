//! Cryptographic primitives for the stored API key.
//!
//! This module provides:
//! - AES-256-GCM encryption and decryption (`encryption`)
//! - The home-directory derived key (`keys`)
//! - Base64 text sealing used by the config store (`vault`)

pub mod encryption;
pub mod keys;
pub mod vault;

pub use encryption::{decrypt, encrypt};
pub use keys::{derive_key, derive_key_from, MachineKey};
pub use vault::{decrypt_string, decrypt_string_with, encrypt_string, encrypt_string_with};

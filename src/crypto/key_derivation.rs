//! Password to key derivation
//!
//! The default scheme hashes the password with SHA-256, unsalted, which keeps
//! tokens compatible with the web wallet. Argon2id with a per-token salt is
//! available as an explicit opt-in and produces a different token layout.

use argon2::{Algorithm, Argon2, Params, Version};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{CipherError, CipherResult};

/// Size of the derived AES-256 key in bytes
pub const KEY_SIZE: usize = 32;

/// Size of the per-token Argon2id salt in bytes
pub const SALT_SIZE: usize = 16;

/// Argon2id cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argon2Params {
    /// Memory cost in KiB (default: 65536 = 64 MiB)
    pub memory_cost: u32,
    /// Time cost (iterations, default: 3)
    pub time_cost: u32,
    /// Parallelism degree (default: 4)
    pub parallelism: u32,
}

impl Default for Argon2Params {
    fn default() -> Self {
        Self {
            memory_cost: 65536,
            time_cost: 3,
            parallelism: 4,
        }
    }
}

impl Argon2Params {
    /// Create params with specific values
    pub fn with_values(memory_cost: u32, time_cost: u32, parallelism: u32) -> Self {
        Self {
            memory_cost,
            time_cost,
            parallelism,
        }
    }

    /// Convert to argon2 `Params`, rejecting values the algorithm cannot use
    pub fn to_argon2(&self) -> CipherResult<Params> {
        Params::new(
            self.memory_cost,
            self.time_cost,
            self.parallelism,
            Some(KEY_SIZE),
        )
        .map_err(|e| CipherError::Config(format!("Invalid Argon2 parameters: {}", e)))
    }
}

/// How a password is turned into an AES-256 key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyDerivation {
    /// SHA-256 of the UTF-8 password, no salt
    #[default]
    Sha256,
    /// Argon2id over the password and a random per-token salt
    Argon2id(Argon2Params),
}

impl KeyDerivation {
    /// Number of salt bytes this scheme prefixes to every token
    pub fn salt_len(&self) -> usize {
        match self {
            Self::Sha256 => 0,
            Self::Argon2id(_) => SALT_SIZE,
        }
    }

    /// Short lowercase name, as used in config files and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Argon2id(_) => "argon2id",
        }
    }
}

/// A derived encryption key, wiped from memory on drop
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_SIZE],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

/// Derive a key as SHA-256(UTF-8 password)
///
/// The same password always yields the same key.
pub fn derive_key(password: &str) -> DerivedKey {
    let mut digest = Sha256::digest(password.as_bytes());

    let mut key = [0u8; KEY_SIZE];
    key.copy_from_slice(&digest);
    digest.as_mut_slice().zeroize();

    DerivedKey { key }
}

/// Derive a key with Argon2id over `password` and `salt`
pub fn derive_key_argon2(
    password: &str,
    salt: &[u8],
    params: &Argon2Params,
) -> CipherResult<DerivedKey> {
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params.to_argon2()?);

    let mut key = [0u8; KEY_SIZE];
    argon2
        .hash_password_into(password.as_bytes(), salt, &mut key)
        .map_err(|e| CipherError::Environment(format!("Key derivation failed: {}", e)))?;

    Ok(DerivedKey { key })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap_params() -> Argon2Params {
        Argon2Params::with_values(64, 1, 1)
    }

    #[test]
    fn test_sha256_known_vector() {
        let key = derive_key("abc");
        let expected: [u8; KEY_SIZE] = [
            0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde, 0x5d, 0xae,
            0x22, 0x23, 0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c, 0xb4, 0x10, 0xff, 0x61,
            0xf2, 0x00, 0x15, 0xad,
        ];
        assert_eq!(key.as_bytes(), &expected);
    }

    #[test]
    fn test_same_password_same_key() {
        let key1 = derive_key("pw123");
        let key2 = derive_key("pw123");
        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_password_different_key() {
        let key1 = derive_key("pw123");
        let key2 = derive_key("wrong");
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_argon2_salt_changes_key() {
        let params = cheap_params();
        let key1 = derive_key_argon2("same_password", &[1u8; SALT_SIZE], &params).unwrap();
        let key2 = derive_key_argon2("same_password", &[2u8; SALT_SIZE], &params).unwrap();
        let key3 = derive_key_argon2("same_password", &[1u8; SALT_SIZE], &params).unwrap();
        assert_ne!(key1.as_bytes(), key2.as_bytes());
        assert_eq!(key1.as_bytes(), key3.as_bytes());
    }

    #[test]
    fn test_invalid_argon2_params_rejected() {
        let params = Argon2Params::with_values(64, 0, 1);
        let err = params.to_argon2().unwrap_err();
        assert!(matches!(err, CipherError::Config(_)));
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = derive_key("secret");
        assert_eq!(format!("{:?}", key), "DerivedKey([REDACTED])");
    }

    #[test]
    fn test_salt_len() {
        assert_eq!(KeyDerivation::Sha256.salt_len(), 0);
        assert_eq!(KeyDerivation::Argon2id(cheap_params()).salt_len(), SALT_SIZE);
    }
}

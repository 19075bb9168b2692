//! AES-256-GCM string encryption
//!
//! Each encryption draws a fresh random nonce from the OS. Decryption never
//! reports why it failed: malformed tokens, wrong passwords, tampered data and
//! non-UTF-8 plaintext all come back as `Ok(None)`. `Err` is reserved for a
//! broken environment.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::error::{CipherError, CipherResult};

use super::key_derivation::{derive_key, derive_key_argon2, DerivedKey, KeyDerivation};
use super::token::{EncodedToken, NONCE_SIZE};

/// Password-based authenticated encryption of UTF-8 strings
///
/// Stateless; one instance can serve any number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringCipher {
    kdf: KeyDerivation,
}

impl StringCipher {
    /// Cipher using unsalted SHA-256 key derivation
    pub fn new() -> Self {
        Self::default()
    }

    /// Cipher using the given key derivation
    ///
    /// Argon2id parameters are checked here so that later calls only fail on
    /// environment errors.
    pub fn with_key_derivation(kdf: KeyDerivation) -> CipherResult<Self> {
        if let KeyDerivation::Argon2id(params) = &kdf {
            params.to_argon2()?;
        }
        Ok(Self { kdf })
    }

    pub fn key_derivation(&self) -> KeyDerivation {
        self.kdf
    }

    /// Encrypt `plaintext` under `password` and return the encoded token
    pub fn encrypt(&self, plaintext: &str, password: &str) -> CipherResult<String> {
        let mut salt = vec![0u8; self.kdf.salt_len()];
        fill_random(&mut salt)?;

        let mut nonce = [0u8; NONCE_SIZE];
        fill_random(&mut nonce)?;

        self.encrypt_with(plaintext, password, salt, nonce)
    }

    /// Decrypt `token` with `password`
    ///
    /// Returns `Ok(None)` when the token cannot be opened for any
    /// input-related reason.
    pub fn decrypt(&self, token: &str, password: &str) -> CipherResult<Option<String>> {
        let Some(parsed) = EncodedToken::decode(token, self.kdf.salt_len()) else {
            debug!(token_len = token.len(), "token is not a well-formed blob");
            return Ok(None);
        };

        let key = self.derive(password, parsed.salt())?;
        let cipher = new_cipher(&key)?;

        let plaintext = match cipher.decrypt(Nonce::from_slice(parsed.nonce()), parsed.ciphertext())
        {
            Ok(bytes) => Zeroizing::new(bytes),
            Err(_) => {
                debug!("authentication tag rejected");
                return Ok(None);
            }
        };

        match std::str::from_utf8(&plaintext) {
            Ok(text) => {
                trace!(plaintext_len = text.len(), "token opened");
                Ok(Some(text.to_owned()))
            }
            Err(_) => {
                debug!("decrypted bytes are not valid UTF-8");
                Ok(None)
            }
        }
    }

    /// Encrypt with caller-chosen salt and nonce
    pub(crate) fn encrypt_with(
        &self,
        plaintext: &str,
        password: &str,
        salt: Vec<u8>,
        nonce: [u8; NONCE_SIZE],
    ) -> CipherResult<String> {
        let key = self.derive(password, &salt)?;
        let cipher = new_cipher(&key)?;

        let ciphertext = cipher
            .encrypt(Nonce::from_slice(&nonce), plaintext.as_bytes())
            .map_err(|e| CipherError::Environment(format!("Encryption failed: {}", e)))?;

        let token = EncodedToken::new(salt, nonce, ciphertext).encode();
        trace!(
            kdf = self.kdf.name(),
            plaintext_len = plaintext.len(),
            token_len = token.len(),
            "token sealed"
        );
        Ok(token)
    }

    fn derive(&self, password: &str, salt: &[u8]) -> CipherResult<DerivedKey> {
        match &self.kdf {
            KeyDerivation::Sha256 => Ok(derive_key(password)),
            KeyDerivation::Argon2id(params) => derive_key_argon2(password, salt, params),
        }
    }
}

/// Encrypt with the default SHA-256 derived key
pub fn encrypt(plaintext: &str, password: &str) -> CipherResult<String> {
    StringCipher::new().encrypt(plaintext, password)
}

/// Decrypt a token produced by [`encrypt`]
pub fn decrypt(token: &str, password: &str) -> CipherResult<Option<String>> {
    StringCipher::new().decrypt(token, password)
}

fn new_cipher(key: &DerivedKey) -> CipherResult<Aes256Gcm> {
    Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| CipherError::Environment(format!("Failed to create cipher: {}", e)))
}

fn fill_random(buf: &mut [u8]) -> CipherResult<()> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| CipherError::Environment(format!("Secure random source unavailable: {}", e)))
}

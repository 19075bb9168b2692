//! Encoded token layout
//!
//! `base64(salt || nonce[12] || ciphertext+tag)` with the standard padded
//! alphabet. The salt is empty for SHA-256 derived keys, so the default token
//! is exactly `base64(nonce || ciphertext+tag)`. There is no version byte; the
//! reader must know which key derivation produced the token.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine};

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_SIZE: usize = 12;

/// A decoded token split into its fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedToken {
    salt: Vec<u8>,
    nonce: [u8; NONCE_SIZE],
    ciphertext: Vec<u8>,
}

impl EncodedToken {
    pub fn new(salt: Vec<u8>, nonce: [u8; NONCE_SIZE], ciphertext: Vec<u8>) -> Self {
        Self {
            salt,
            nonce,
            ciphertext,
        }
    }

    /// Decode a token whose salt prefix is `salt_len` bytes long
    ///
    /// Returns `None` for invalid base64 or a blob too short to hold the salt
    /// and nonce.
    pub fn decode(token: &str, salt_len: usize) -> Option<Self> {
        let bytes = STANDARD.decode(token).ok()?;
        if bytes.len() < salt_len + NONCE_SIZE {
            return None;
        }

        let (salt, rest) = bytes.split_at(salt_len);
        let (nonce_bytes, ciphertext) = rest.split_at(NONCE_SIZE);

        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(nonce_bytes);

        Some(Self {
            salt: salt.to_vec(),
            nonce,
            ciphertext: ciphertext.to_vec(),
        })
    }

    /// Encode the token as printable text
    pub fn encode(&self) -> String {
        let mut blob = Vec::with_capacity(self.salt.len() + NONCE_SIZE + self.ciphertext.len());
        blob.extend_from_slice(&self.salt);
        blob.extend_from_slice(&self.nonce);
        blob.extend_from_slice(&self.ciphertext);
        STANDARD.encode(blob)
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    pub fn nonce(&self) -> &[u8; NONCE_SIZE] {
        &self.nonce
    }

    /// Ciphertext with the 16-byte GCM tag appended
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }
}

impl fmt::Display for EncodedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonce_is_prefix() {
        let token = EncodedToken::new(Vec::new(), [7u8; NONCE_SIZE], vec![1, 2, 3]);
        let raw = STANDARD.decode(token.encode()).unwrap();
        assert_eq!(&raw[..NONCE_SIZE], &[7u8; NONCE_SIZE]);
        assert_eq!(&raw[NONCE_SIZE..], &[1, 2, 3]);
    }

    #[test]
    fn test_salt_precedes_nonce() {
        let token = EncodedToken::new(vec![9u8; 16], [7u8; NONCE_SIZE], vec![1]);
        let decoded = EncodedToken::decode(&token.encode(), 16).unwrap();
        assert_eq!(decoded.salt(), &[9u8; 16]);
        assert_eq!(decoded.nonce(), &[7u8; NONCE_SIZE]);
        assert_eq!(decoded.ciphertext(), &[1]);
    }

    #[test]
    fn test_rejects_invalid_base64() {
        assert!(EncodedToken::decode("not-base64!!", 0).is_none());
    }

    #[test]
    fn test_rejects_short_blob() {
        let short = STANDARD.encode([0u8; NONCE_SIZE - 1]);
        assert!(EncodedToken::decode(&short, 0).is_none());

        let no_salt_room = STANDARD.encode([0u8; NONCE_SIZE + 4]);
        assert!(EncodedToken::decode(&no_salt_room, 16).is_none());
    }

    #[test]
    fn test_bare_nonce_has_empty_ciphertext() {
        let bare = STANDARD.encode([0u8; NONCE_SIZE]);
        let decoded = EncodedToken::decode(&bare, 0).unwrap();
        assert!(decoded.ciphertext().is_empty());
    }
}

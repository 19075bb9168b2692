//! Cryptographic functions for kromer-cipher
//!
//! Provides AES-256-GCM encryption of strings under a password-derived key,
//! packed into a single base64 token.

pub mod cipher;
pub mod key_derivation;
pub mod token;

pub use cipher::{decrypt, encrypt, StringCipher};
pub use key_derivation::{
    derive_key, derive_key_argon2, Argon2Params, DerivedKey, KeyDerivation,
};
pub use token::{EncodedToken, NONCE_SIZE};

//! kromer-cipher - password-based string encryption
//!
//! Encrypts short strings (wallet notes, private keys, memos) under a
//! password with AES-256-GCM. The output is a single base64 token that the
//! Kromer web wallet can read back.
//!
//! # Architecture
//!
//! - `crypto`: key derivation, token layout and the `StringCipher`
//! - `config`: path resolution and persisted settings for the CLI
//! - `cli`: command handlers behind the `kcipher` binary
//! - `telemetry`: tracing subscriber setup
//! - `error`: custom error types
//!
//! # Example
//!
//! ```rust
//! use kromer_cipher::{decrypt, encrypt};
//!
//! let token = encrypt("hello world", "pw123")?;
//! assert_eq!(decrypt(&token, "pw123")?.as_deref(), Some("hello world"));
//! assert_eq!(decrypt(&token, "wrong")?, None);
//! # Ok::<(), kromer_cipher::CipherError>(())
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;
pub mod telemetry;

pub use crypto::{decrypt, encrypt, KeyDerivation, StringCipher};
pub use error::{CipherError, CipherResult};

//! Configuration module for kromer-cipher
//!
//! - Config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::CipherPaths;
pub use settings::{KdfAlgorithm, KeyDerivationSettings, Settings};

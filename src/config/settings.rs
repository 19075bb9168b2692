//! User settings for kromer-cipher
//!
//! Stored as pretty JSON in `config.json`. Every field has a serde default so
//! older or hand-written files keep loading.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::paths::CipherPaths;
use crate::crypto::key_derivation::{Argon2Params, KeyDerivation};
use crate::error::CipherError;

/// Key derivation algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum KdfAlgorithm {
    /// Unsalted SHA-256, readable by the web wallet (default)
    #[default]
    Sha256,
    /// Salted Argon2id; tokens are not readable by the web wallet
    Argon2id,
}

/// Key derivation settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyDerivationSettings {
    #[serde(default)]
    pub algorithm: KdfAlgorithm,

    /// Argon2id parameters, ignored for SHA-256
    #[serde(default)]
    pub argon2: Argon2Params,
}

impl KeyDerivationSettings {
    /// Resolve the key derivation, with `algorithm` overriding the stored one
    pub fn resolve(&self, algorithm: Option<KdfAlgorithm>) -> KeyDerivation {
        match algorithm.unwrap_or(self.algorithm) {
            KdfAlgorithm::Sha256 => KeyDerivation::Sha256,
            KdfAlgorithm::Argon2id => KeyDerivation::Argon2id(self.argon2),
        }
    }
}

/// User settings for kromer-cipher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default tracing filter, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub key_derivation: KeyDerivationSettings,

    /// Prompted passwords shorter than this trigger a warning
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,

    /// Decrypt every fresh token once before printing it
    #[serde(default)]
    pub verify_after_encrypt: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_min_password_length() -> usize {
    8
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            log_level: default_log_level(),
            key_derivation: KeyDerivationSettings::default(),
            min_password_length: default_min_password_length(),
            verify_after_encrypt: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &CipherPaths) -> Result<Self, CipherError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                CipherError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                CipherError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CipherPaths) -> Result<(), CipherError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            CipherError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            CipherError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

//! Path management for kromer-cipher
//!
//! ## Path Resolution Order
//!
//! 1. `KROMER_CIPHER_HOME` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/kromer-cipher` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::CipherError;

/// Environment variable that overrides the config directory
pub const HOME_ENV_VAR: &str = "KROMER_CIPHER_HOME";

/// Manages all paths used by kromer-cipher
#[derive(Debug, Clone)]
pub struct CipherPaths {
    base_dir: PathBuf,
}

impl CipherPaths {
    /// Resolve the config directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, CipherError> {
        let base_dir = match std::env::var_os(HOME_ENV_VAR) {
            Some(custom) => PathBuf::from(custom),
            None => ProjectDirs::from("cc", "reconnected", "kromer-cipher")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    CipherError::Config("Could not determine a home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create CipherPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), CipherError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CipherError::Io(format!("Failed to create config directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CipherPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var(HOME_ENV_VAR, temp_dir.path());
        let paths = CipherPaths::new().unwrap();
        std::env::remove_var(HOME_ENV_VAR);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CipherPaths::with_base_dir(temp_dir.path().join("nested").join("dir"));

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}

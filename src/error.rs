//! Error types for kromer-cipher
//!
//! Expected decryption failures (malformed token, wrong password, tampered
//! data, non-UTF-8 plaintext) are deliberately collapsed into one variant so
//! callers cannot tell them apart.

use thiserror::Error;

/// The main error type for kromer-cipher operations
#[derive(Error, Debug)]
pub enum CipherError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Broken runtime: no secure randomness, cipher could not be built
    #[error("Crypto environment error: {0}")]
    Environment(String),

    /// Bad user input on the command line
    #[error("Invalid input: {0}")]
    Input(String),

    /// A token could not be opened with the given password
    #[error("could not decrypt")]
    DecryptionFailed,
}

impl CipherError {
    /// Check if this is an unrecoverable environment failure
    pub fn is_environment(&self) -> bool {
        matches!(self, Self::Environment(_))
    }

    /// Check if this is the collapsed decryption failure
    pub fn is_decryption_failed(&self) -> bool {
        matches!(self, Self::DecryptionFailed)
    }
}

impl From<std::io::Error> for CipherError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CipherError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for kromer-cipher operations
pub type CipherResult<T> = Result<T, CipherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CipherError::Config("bad kdf".into());
        assert_eq!(err.to_string(), "Configuration error: bad kdf");
    }

    #[test]
    fn test_decryption_failed_has_no_detail() {
        let err = CipherError::DecryptionFailed;
        assert_eq!(err.to_string(), "could not decrypt");
        assert!(err.is_decryption_failed());
        assert!(!err.is_environment());
    }

    #[test]
    fn test_environment_error() {
        let err = CipherError::Environment("no entropy".into());
        assert!(err.is_environment());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CipherError = io_err.into();
        assert!(matches!(err, CipherError::Io(_)));
    }
}

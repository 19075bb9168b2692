//! Logging setup

use tracing_subscriber::EnvFilter;

use crate::error::{CipherError, CipherResult};

/// Initialise the global tracing subscriber.
///
/// Logs go to stderr so stdout only ever carries tokens and plaintext.
/// `RUST_LOG` takes precedence over `log_level`.
///
/// # Errors
///
/// Returns an error if the level is unparseable or a global subscriber has
/// already been set.
pub fn init_tracing(log_level: &str) -> CipherResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level)
            .map_err(|e| CipherError::Config(format!("Invalid log level '{}': {}", log_level, e)))?,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| CipherError::Config(format!("Failed to initialise logging: {}", e)))
}

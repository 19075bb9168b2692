//! CLI command handlers
//!
//! Bridges the clap argument parsing in `main.rs` with the crypto layer.

pub mod cipher;
pub mod config;

pub use cipher::{
    handle_decrypt_command, handle_encrypt_command, CipherArgs, DecryptArgs, EncryptArgs,
};
pub use config::{handle_config_command, ConfigCommands};

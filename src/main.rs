use anyhow::Result;
use clap::{Parser, Subcommand};

use kromer_cipher::cli::{
    handle_config_command, handle_decrypt_command, handle_encrypt_command, ConfigCommands,
    DecryptArgs, EncryptArgs,
};
use kromer_cipher::config::{CipherPaths, Settings};
use kromer_cipher::{telemetry, CipherError};

#[derive(Parser)]
#[command(
    name = "kcipher",
    version,
    about = "Password-based string encryption for Kromer wallets",
    long_about = "kcipher encrypts short strings under a password with AES-256-GCM \
                  and prints a single base64 token that the Kromer web wallet can \
                  decrypt, and the other way round."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text and print the token
    #[command(alias = "enc")]
    Encrypt(EncryptArgs),

    /// Decrypt a token and print the text
    #[command(alias = "dec")]
    Decrypt(DecryptArgs),

    /// Configuration commands
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = CipherPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    telemetry::init_tracing(&settings.log_level)?;

    let result = match cli.command {
        Commands::Encrypt(args) => handle_encrypt_command(&settings, args),
        Commands::Decrypt(args) => handle_decrypt_command(&settings, args),
        Commands::Config(cmd) => handle_config_command(&paths, &settings, cmd),
    };

    match result {
        Err(CipherError::DecryptionFailed) => {
            eprintln!("{}", CipherError::DecryptionFailed);
            std::process::exit(1);
        }
        other => other.map_err(Into::into),
    }
}

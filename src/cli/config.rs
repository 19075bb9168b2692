//! Config CLI commands

use clap::Subcommand;

use crate::config::{CipherPaths, KdfAlgorithm, Settings};
use crate::error::CipherResult;

/// Configuration commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config paths and current settings
    Show,

    /// Write default settings to the config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Handle config commands
pub fn handle_config_command(
    paths: &CipherPaths,
    settings: &Settings,
    cmd: ConfigCommands,
) -> CipherResult<()> {
    match cmd {
        ConfigCommands::Show => show_config(paths, settings),
        ConfigCommands::Init { force } => init_config(paths, force),
    }
}

fn show_config(paths: &CipherPaths, settings: &Settings) -> CipherResult<()> {
    println!("kromer-cipher Configuration");
    println!("===========================");
    println!("Config file: {}", paths.settings_file().display());
    if !paths.is_initialized() {
        println!("             (not written, showing defaults)");
    }
    println!();
    println!("Settings:");
    println!("  Log level:            {}", settings.log_level);
    println!(
        "  Key derivation:       {}",
        settings.key_derivation.resolve(None).name()
    );
    if settings.key_derivation.algorithm == KdfAlgorithm::Argon2id {
        let params = &settings.key_derivation.argon2;
        println!("    Memory Cost:        {} KiB", params.memory_cost);
        println!("    Time Cost:          {} iterations", params.time_cost);
        println!("    Parallelism:        {} threads", params.parallelism);
    }
    println!("  Min password length:  {}", settings.min_password_length);
    println!("  Verify after encrypt: {}", settings.verify_after_encrypt);

    Ok(())
}

fn init_config(paths: &CipherPaths, force: bool) -> CipherResult<()> {
    if paths.is_initialized() && !force {
        println!(
            "Config already exists at {}. Use --force to overwrite.",
            paths.settings_file().display()
        );
        return Ok(());
    }

    Settings::default().save(paths)?;
    println!("Wrote default config to {}", paths.settings_file().display());
    Ok(())
}

//! Encrypt and decrypt commands

use std::io::Read;

use clap::Args;
use tracing::{info, warn};
use zeroize::Zeroizing;

use crate::config::{KdfAlgorithm, Settings};
use crate::crypto::StringCipher;
use crate::error::{CipherError, CipherResult};

/// Environment variable read when `--password` is not given
pub const PASSWORD_ENV_VAR: &str = "KROMER_CIPHER_PASSWORD";

/// Options shared by encrypt and decrypt
#[derive(Args, Debug)]
pub struct CipherArgs {
    /// Password; prompted with hidden input when omitted
    #[arg(short, long, env = "KROMER_CIPHER_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Key derivation, overriding the config file
    #[arg(long, value_enum)]
    pub kdf: Option<KdfAlgorithm>,
}

#[derive(Args, Debug)]
pub struct EncryptArgs {
    /// Text to encrypt; read from stdin when omitted
    pub text: Option<String>,

    #[command(flatten)]
    pub cipher: CipherArgs,
}

#[derive(Args, Debug)]
pub struct DecryptArgs {
    /// Token to decrypt; read from stdin when omitted
    pub token: Option<String>,

    #[command(flatten)]
    pub cipher: CipherArgs,
}

/// Encrypt text and print the token to stdout
pub fn handle_encrypt_command(settings: &Settings, args: EncryptArgs) -> CipherResult<()> {
    let cipher = build_cipher(settings, args.cipher.kdf)?;
    let plaintext = Zeroizing::new(match args.text {
        Some(text) => text,
        None => read_stdin()?,
    });
    let password = resolve_password(args.cipher.password, true, settings.min_password_length)?;

    let token = cipher.encrypt(&plaintext, &password)?;

    if settings.verify_after_encrypt {
        let reopened = Zeroizing::new(cipher.decrypt(&token, &password)?);
        if reopened.as_deref() != Some(plaintext.as_str()) {
            return Err(CipherError::Environment(
                "Fresh token did not decrypt back to its input".to_string(),
            ));
        }
    }

    info!(
        kdf = cipher.key_derivation().name(),
        token_len = token.len(),
        "encrypted"
    );
    println!("{}", token);
    Ok(())
}

/// Decrypt a token and print the plaintext to stdout
///
/// Any input-related failure surfaces as [`CipherError::DecryptionFailed`].
pub fn handle_decrypt_command(settings: &Settings, args: DecryptArgs) -> CipherResult<()> {
    let cipher = build_cipher(settings, args.cipher.kdf)?;
    let token = match args.token {
        Some(token) => token,
        None => read_stdin()?,
    };
    let password = resolve_password(args.cipher.password, false, settings.min_password_length)?;

    match cipher.decrypt(token.trim(), &password)? {
        Some(plaintext) => {
            let plaintext = Zeroizing::new(plaintext);
            info!(kdf = cipher.key_derivation().name(), "decrypted");
            println!("{}", plaintext.as_str());
            Ok(())
        }
        None => {
            warn!(kdf = cipher.key_derivation().name(), "decryption failed");
            Err(CipherError::DecryptionFailed)
        }
    }
}

fn build_cipher(settings: &Settings, kdf: Option<KdfAlgorithm>) -> CipherResult<StringCipher> {
    StringCipher::with_key_derivation(settings.key_derivation.resolve(kdf))
}

/// Use the given password, or prompt for one
fn resolve_password(
    provided: Option<String>,
    confirm: bool,
    min_length: usize,
) -> CipherResult<Zeroizing<String>> {
    if let Some(password) = provided {
        return Ok(Zeroizing::new(password));
    }

    if !confirm {
        return prompt_password("Password: ");
    }

    loop {
        let pass1 = prompt_password("Password: ")?;

        if pass1.chars().count() < min_length {
            eprintln!(
                "Warning: password is shorter than {} characters.",
                min_length
            );
        }

        let pass2 = prompt_password("Confirm password: ")?;

        if pass1 != pass2 {
            eprintln!("Passwords do not match. Please try again.");
            continue;
        }

        return Ok(pass1);
    }
}

/// Prompt for a password (hidden input)
fn prompt_password(prompt: &str) -> CipherResult<Zeroizing<String>> {
    rpassword::prompt_password(prompt)
        .map(Zeroizing::new)
        .map_err(|e| CipherError::Input(format!("Failed to read password: {}", e)))
}

fn read_stdin() -> CipherResult<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| CipherError::Input(format!("Failed to read stdin: {}", e)))?;
    Ok(strip_trailing_newline(buf))
}

/// Drop a single trailing `\n` or `\r\n`
fn strip_trailing_newline(mut input: String) -> String {
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    input
}

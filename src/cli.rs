//! CLI argument definitions for jwt-mint.
//!
//! Uses `clap` derive macros to define the command-line interface.
//! Each subcommand has its own argument struct for type-safe parsing.
//!
//! # Security
//!
//! `EncodeArgs` and `DecodeArgs` implement custom `Debug` to redact
//! sensitive fields (tokens, passwords, and secrets) and prevent
//! accidental leakage through debug formatting, error chains, or logging.

use std::fmt;

use clap::{Parser, Subcommand};
use zeroize::Zeroizing;

/// A small, offline CLI for minting and verifying HMAC-signed
/// JSON Web Tokens (JWTs) with a shared secret.
#[derive(Debug, Parser)]
#[command(name = "jwt-mint")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create an HS256-signed JWT from login, password, and message claims.
    Encode(EncodeArgs),

    /// Verify a JWT's signature and expiry, then print its claims.
    Decode(DecodeArgs),

    /// Generate a random hex secret suitable for HMAC signing.
    GenSecret(GenSecretArgs),
}

/// Arguments for the `encode` subcommand.
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// The `login` claim to embed in the token.
    #[arg(long, value_name = "LOGIN")]
    pub login: String,

    /// The `password` claim to embed in the token.
    #[arg(long, value_name = "PASSWORD")]
    pub password: String,

    /// The `message` claim to embed in the token.
    #[arg(long, value_name = "MESSAGE")]
    pub message: String,

    /// HMAC shared secret used to sign the token.
    ///
    /// WARNING: Passing secrets via CLI arguments may expose them in shell
    /// history. Prefer using --secret-env instead.
    #[arg(long, value_name = "SECRET", value_parser = parse_zeroizing_string)]
    pub secret: Option<Zeroizing<String>>,

    /// Read the HMAC secret from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME")]
    pub secret_env: Option<String>,
}

/// Custom `Debug` that redacts password and secret fields to prevent
/// accidental leakage through debug formatting or error chains.
impl fmt::Debug for EncodeArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodeArgs")
            .field("login", &self.login)
            .field("password", &"[REDACTED]")
            .field("message", &self.message)
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("secret_env", &self.secret_env)
            .finish()
    }
}

/// Arguments for the `decode` subcommand.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// The JWT token to verify and decode. If omitted, reads from stdin.
    pub token: Option<String>,

    /// Read the token from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME")]
    pub token_env: Option<String>,

    /// HMAC shared secret the token was signed with.
    ///
    /// WARNING: Passing secrets via CLI arguments may expose them in shell
    /// history. Prefer using --secret-env instead.
    #[arg(long, value_name = "SECRET", value_parser = parse_zeroizing_string)]
    pub secret: Option<Zeroizing<String>>,

    /// Read the HMAC secret from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME")]
    pub secret_env: Option<String>,

    /// Output raw JSON without the status line (machine-readable).
    #[arg(long)]
    pub json: bool,
}

/// Custom `Debug` that redacts token and secret fields to prevent
/// accidental leakage through debug formatting or error chains.
impl fmt::Debug for DecodeArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeArgs")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("token_env", &self.token_env)
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("secret_env", &self.secret_env)
            .field("json", &self.json)
            .finish()
    }
}

/// Arguments for the `gen-secret` subcommand.
#[derive(Debug, clap::Args)]
pub struct GenSecretArgs {
    /// Number of random bytes to generate (output is twice as many hex chars).
    #[arg(
        long,
        value_name = "N",
        default_value_t = crate::core::secret::DEFAULT_SECRET_BYTES,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new()
            .range(1..=crate::core::secret::MAX_SECRET_BYTES as u64)
    )]
    pub bytes: usize,
}

/// Parse a string into a `Zeroizing<String>` for secure CLI arguments.
fn parse_zeroizing_string(s: &str) -> Result<Zeroizing<String>, std::convert::Infallible> {
    Ok(Zeroizing::new(s.to_string()))
}

//! Handler for the `decode` subcommand.
//!
//! Resolves the token and secret, verifies signature and expiry, and
//! prints the decoded payload. Supports reading the token from a CLI
//! argument, environment variable, or stdin.

use anyhow::{Context, Result};
use chrono::Utc;

use crate::cli::DecodeArgs;
use crate::commands::input;
use crate::core::verifier::verify_token;
use crate::display::{json_printer, token_status};

/// Execute the `decode` subcommand with the given arguments.
pub fn execute(args: &DecodeArgs) -> Result<()> {
    let token = input::resolve_token(args.token.as_deref(), args.token_env.as_deref())
        .context("error decoding token")?;
    let secret = input::resolve_secret(args.secret.as_ref(), args.secret_env.as_deref())
        .context("error decoding token")?;

    let payload = verify_token(&token, &secret).context("error decoding token")?;

    println!("{}", json_printer::render_json(&payload));

    if !args.json {
        if let Some(status) = token_status::expiry_status(&payload, Utc::now().timestamp()) {
            println!();
            println!("Token Status: {status}");
        }
    }

    Ok(())
}

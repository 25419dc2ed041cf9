//! Handler for the `encode` subcommand.
//!
//! Builds the claim set from the parsed arguments, signs it with the
//! resolved secret, and prints the minted token on stdout.

use anyhow::{Context, Result};

use crate::cli::EncodeArgs;
use crate::commands::input;
use crate::core::encoder::{ClaimSet, encode_token};

/// Execute the `encode` subcommand with the given arguments.
pub fn execute(args: &EncodeArgs) -> Result<()> {
    let secret = input::resolve_secret(args.secret.as_ref(), args.secret_env.as_deref())
        .context("error creating token")?;

    let claims = ClaimSet {
        login: args.login.clone(),
        password: args.password.clone(),
        message: args.message.clone(),
    };

    let token = encode_token(&claims, &secret).context("error creating token")?;
    println!("{token}");
    Ok(())
}

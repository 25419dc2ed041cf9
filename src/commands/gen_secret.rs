//! Handler for the `gen-secret` subcommand.
//!
//! Prints a freshly generated hex secret on stdout, suitable for use
//! as the HMAC signing secret of the other subcommands.

use anyhow::Result;

use crate::cli::GenSecretArgs;
use crate::core::secret::generate_secret;

/// Execute the `gen-secret` subcommand with the given arguments.
pub fn execute(args: &GenSecretArgs) -> Result<()> {
    println!("{}", generate_secret(args.bytes));
    Ok(())
}

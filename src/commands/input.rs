//! Input resolution shared by the command handlers.
//!
//! Tokens can arrive as a CLI argument, through an environment
//! variable, or via stdin; secrets as an argument or an environment
//! variable. Environment variable names are validated before lookup
//! to reject names that the OS cannot represent.

use std::env;
use std::io::Read;

use zeroize::Zeroizing;

use crate::error::JwtMintError;

/// Resolve the token from argument, environment variable, or stdin.
///
/// Precedence: explicit argument, then `--token-env`, then stdin.
/// Surrounding whitespace (including a trailing newline from piped
/// input) is trimmed.
pub(crate) fn resolve_token(
    arg: Option<&str>,
    env_name: Option<&str>,
) -> Result<String, JwtMintError> {
    if let Some(token) = arg {
        let token = token.trim();
        if token.is_empty() {
            return Err(JwtMintError::NoTokenProvided);
        }
        return Ok(token.to_string());
    }

    if let Some(name) = env_name {
        return read_env_var(name);
    }

    read_stdin_token()
}

/// Resolve the secret from argument or environment variable.
///
/// The secret stays wrapped in [`Zeroizing`] end to end. An empty
/// secret value is passed through so the core can report its own
/// validation error.
pub(crate) fn resolve_secret(
    arg: Option<&Zeroizing<String>>,
    env_name: Option<&str>,
) -> Result<Zeroizing<String>, JwtMintError> {
    match (arg, env_name) {
        (Some(secret), _) => Ok(secret.clone()),
        (None, Some(name)) => Ok(Zeroizing::new(read_env_var(name)?)),
        (None, None) => Err(JwtMintError::NoSecretProvided),
    }
}

/// Read an environment variable after validating its name.
fn read_env_var(name: &str) -> Result<String, JwtMintError> {
    if name.is_empty() || name.contains('=') || name.contains('\0') {
        return Err(JwtMintError::InvalidEnvVarName {
            name: name.to_string(),
        });
    }

    env::var(name).map_err(|_| JwtMintError::EnvVarNotFound {
        name: name.to_string(),
    })
}

/// Read a token from stdin, trimming surrounding whitespace.
fn read_stdin_token() -> Result<String, JwtMintError> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(|_| JwtMintError::NoTokenProvided)?;

    let token = buf.trim();
    if token.is_empty() {
        return Err(JwtMintError::NoTokenProvided);
    }
    Ok(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_token_prefers_argument() {
        let token = resolve_token(Some("abc.def.ghi"), Some("IGNORED_VAR")).unwrap();
        assert_eq!(token, "abc.def.ghi");
    }

    #[test]
    fn test_resolve_token_trims_whitespace() {
        let token = resolve_token(Some("  abc.def.ghi\n"), None).unwrap();
        assert_eq!(token, "abc.def.ghi");
    }

    #[test]
    fn test_resolve_token_empty_argument_fails() {
        let err = resolve_token(Some(""), None).unwrap_err();
        assert!(matches!(err, JwtMintError::NoTokenProvided));
    }

    #[test]
    fn test_read_env_var_rejects_name_with_equals() {
        let err = read_env_var("BAD=NAME").unwrap_err();
        assert!(matches!(err, JwtMintError::InvalidEnvVarName { .. }));
    }

    #[test]
    fn test_read_env_var_rejects_empty_name() {
        let err = read_env_var("").unwrap_err();
        assert!(matches!(err, JwtMintError::InvalidEnvVarName { .. }));
    }

    #[test]
    fn test_read_env_var_rejects_name_with_nul() {
        let err = read_env_var("BAD\0NAME").unwrap_err();
        assert!(matches!(err, JwtMintError::InvalidEnvVarName { .. }));
    }

    #[test]
    fn test_read_env_var_missing_variable_fails() {
        let err = read_env_var("JWT_MINT_DEFINITELY_UNSET_VAR").unwrap_err();
        assert!(matches!(
            err,
            JwtMintError::EnvVarNotFound { name } if name == "JWT_MINT_DEFINITELY_UNSET_VAR"
        ));
    }

    #[test]
    fn test_resolve_secret_requires_a_source() {
        let err = resolve_secret(None, None).unwrap_err();
        assert!(matches!(err, JwtMintError::NoSecretProvided));
    }

    #[test]
    fn test_resolve_secret_prefers_argument() {
        let secret = Zeroizing::new("sekret123".to_string());
        let resolved = resolve_secret(Some(&secret), Some("IGNORED_VAR")).unwrap();
        assert_eq!(&*resolved, "sekret123");
    }
}

//! Domain error types for jwt-mint.
//!
//! All business-logic errors are defined here using `thiserror`.
//! These errors are converted to user-friendly messages at the CLI
//! boundary, where the command layer prefixes them with the operation
//! name ("error creating token: ..." / "error decoding token: ...").

use thiserror::Error;

/// Errors that can occur during token operations.
#[derive(Debug, Error)]
pub enum JwtMintError {
    /// One or more required encode inputs are empty.
    #[error("all fields are required")]
    MissingClaimFields,

    /// The token or the secret passed to decode is empty.
    #[error("token and secret are required")]
    MissingTokenOrSecret,

    /// The provided token does not have the expected three-part structure.
    #[error("invalid token format: expected 'header.payload.signature' structure")]
    InvalidTokenFormat,

    /// Failed to decode a base64url-encoded token segment.
    #[error("failed to decode {segment}: invalid base64url encoding")]
    Base64DecodeError {
        /// Which segment failed to decode (e.g., "header", "payload").
        segment: String,
    },

    /// Failed to parse decoded JSON content.
    #[error("failed to parse {segment} as JSON: {reason}")]
    JsonParseError {
        /// Which segment failed to parse (e.g., "header", "payload").
        segment: String,
        /// Description of the parsing failure.
        reason: String,
    },

    /// The token header declares an algorithm other than HS256.
    #[error("unsupported algorithm '{algorithm}': only HS256 tokens are accepted")]
    UnsupportedAlgorithm {
        /// The algorithm declared in the token header.
        algorithm: String,
    },

    /// The recomputed signature does not match the token's signature.
    #[error("signature validation failed: signature does not match")]
    SignatureMismatch,

    /// The token's `exp` claim is at or before the current time.
    #[error("token has expired")]
    TokenExpired,

    /// The signing primitive failed while creating a token.
    #[error("failed to sign token: {reason}")]
    SigningError {
        /// Description of the signing failure.
        reason: String,
    },

    /// No token was provided via any input method.
    #[error("no token provided: pass a token as an argument, via --token-env, or through stdin")]
    NoTokenProvided,

    /// No secret was provided via any input method.
    #[error("no secret provided: pass --secret or --secret-env")]
    NoSecretProvided,

    /// The specified environment variable is not set.
    #[error("environment variable '{name}' is not set")]
    EnvVarNotFound {
        /// Name of the missing environment variable.
        name: String,
    },

    /// The specified environment variable name is not usable.
    #[error("invalid environment variable name '{name}'")]
    InvalidEnvVarName {
        /// The rejected variable name.
        name: String,
    },
}

//! Token creation.
//!
//! Assembles the claim set, stamps an absolute expiration 24 hours in
//! the future, and signs the result as an HS256 JWT using the key
//! derived from the shared secret.

use std::fmt;

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::Serialize;

use crate::core::key::derive_key;
use crate::error::JwtMintError;

/// Token lifetime: tokens expire 24 hours after they are minted.
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// The claim fields embedded in every minted token.
///
/// Implements a custom `Debug` that redacts `password` to prevent
/// accidental leakage through debug formatting or error chains.
pub struct ClaimSet {
    /// The `login` claim.
    pub login: String,
    /// The `password` claim.
    pub password: String,
    /// The `message` claim.
    pub message: String,
}

impl ClaimSet {
    /// Whether every claim field is non-empty.
    pub fn is_complete(&self) -> bool {
        !self.login.is_empty() && !self.password.is_empty() && !self.message.is_empty()
    }
}

/// Custom `Debug` that redacts the password claim.
impl fmt::Debug for ClaimSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClaimSet")
            .field("login", &self.login)
            .field("password", &"[REDACTED]")
            .field("message", &self.message)
            .finish()
    }
}

/// The serialized payload: the claim set plus the `exp` timestamp.
#[derive(Serialize)]
struct TokenPayload<'a> {
    login: &'a str,
    password: &'a str,
    message: &'a str,
    exp: i64,
}

/// Create an HS256-signed token from the given claims and secret.
///
/// The payload carries the three claims plus `exp`, set 24 hours from
/// the current time as Unix epoch seconds. The resulting token is a
/// standard three-segment compact JWT, verifiable by any JWT library
/// holding the same secret.
///
/// # Errors
///
/// Returns [`JwtMintError::MissingClaimFields`] if any claim or the
/// secret is empty, or [`JwtMintError::SigningError`] if the signing
/// primitive fails.
pub fn encode_token(claims: &ClaimSet, secret: &str) -> Result<String, JwtMintError> {
    encode_token_at(claims, secret, Utc::now().timestamp())
}

/// Create a token as of an explicit `now` timestamp.
///
/// Deterministic given identical inputs and `now`. `encode_token` is
/// this with the wall clock plugged in.
pub fn encode_token_at(claims: &ClaimSet, secret: &str, now: i64) -> Result<String, JwtMintError> {
    if !claims.is_complete() || secret.is_empty() {
        return Err(JwtMintError::MissingClaimFields);
    }

    let key = derive_key(secret);
    let payload = TokenPayload {
        login: &claims.login,
        password: &claims.password,
        message: &claims.message,
        exp: now + TOKEN_TTL_SECS,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &payload,
        &EncodingKey::from_secret(&key),
    )
    .map_err(|e| JwtMintError::SigningError {
        reason: e.to_string(),
    })
}

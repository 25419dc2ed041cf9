//! Token verification.
//!
//! Validates a compact token's structure, algorithm, signature, and
//! expiry against the shared secret, and yields the decoded payload on
//! success. Any single failed check rejects the whole token; there is
//! no partially-trusted result.

use std::collections::HashSet;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde_json::Value;

use crate::core::decoder::decode_token;
use crate::core::key::derive_key;
use crate::error::JwtMintError;

/// The only algorithm accepted by this verifier.
const EXPECTED_ALGORITHM: &str = "HS256";

/// Verify a token against the shared secret and return its payload.
///
/// Checks, in order: input presence, three-segment structure, declared
/// header algorithm (exactly HS256 — anything else is rejected before
/// any signature work, which blocks algorithm-confusion attacks,
/// including `alg:none`), HMAC-SHA256 signature, and the `exp` claim
/// when present. Expiry is strict: a token whose `exp` equals the
/// current second is already stale. Signature comparison is
/// constant-time, provided by the underlying verification primitive.
///
/// On success returns the full payload mapping (claims plus `exp`).
///
/// # Errors
///
/// Returns [`JwtMintError::MissingTokenOrSecret`] for empty inputs, a
/// malformed-token error for structural problems,
/// [`JwtMintError::UnsupportedAlgorithm`] for non-HS256 headers,
/// [`JwtMintError::SignatureMismatch`] when the signature does not
/// match, and [`JwtMintError::TokenExpired`] when `exp` is at or
/// before the current time.
pub fn verify_token(token: &str, secret: &str) -> Result<Value, JwtMintError> {
    verify_token_at(token, secret, Utc::now().timestamp())
}

/// Verify a token as of an explicit `now` timestamp.
///
/// Deterministic given identical inputs and `now`. `verify_token` is
/// this with the wall clock plugged in.
pub fn verify_token_at(token: &str, secret: &str, now: i64) -> Result<Value, JwtMintError> {
    if token.is_empty() || secret.is_empty() {
        return Err(JwtMintError::MissingTokenOrSecret);
    }

    let decoded = decode_token(token)?;
    let algorithm = decoded.header["alg"].as_str().unwrap_or("(missing)");
    if algorithm != EXPECTED_ALGORITHM {
        return Err(JwtMintError::UnsupportedAlgorithm {
            algorithm: algorithm.to_string(),
        });
    }

    let key = derive_key(secret);

    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    // Expiry is checked against `now` below, with the strict boundary;
    // the primitive's own exp validation stays out of the way.
    validation.validate_exp = false;
    validation.validate_nbf = false;
    validation.validate_aud = false;
    validation.required_spec_claims = HashSet::new();

    let payload = match decode::<Value>(token, &DecodingKey::from_secret(&key), &validation) {
        Ok(data) => data.claims,
        Err(e) => return Err(map_verification_error(e.kind())),
    };

    check_expiry(&payload, now)?;
    Ok(payload)
}

/// Reject payloads whose `exp` is at or before `now`.
///
/// `exp` is optional: tokens without a numeric `exp` claim verify on
/// signature alone.
fn check_expiry(payload: &Value, now: i64) -> Result<(), JwtMintError> {
    match payload.get("exp").and_then(Value::as_i64) {
        Some(exp) if exp <= now => Err(JwtMintError::TokenExpired),
        _ => Ok(()),
    }
}

/// Map a `jsonwebtoken` error kind onto the domain error taxonomy.
fn map_verification_error(kind: &jsonwebtoken::errors::ErrorKind) -> JwtMintError {
    use jsonwebtoken::errors::ErrorKind;

    match kind {
        ErrorKind::InvalidSignature => JwtMintError::SignatureMismatch,
        ErrorKind::Base64(_) => JwtMintError::Base64DecodeError {
            segment: "signature".to_string(),
        },
        ErrorKind::Json(e) => JwtMintError::JsonParseError {
            segment: "payload".to_string(),
            reason: e.to_string(),
        },
        _ => JwtMintError::InvalidTokenFormat,
    }
}

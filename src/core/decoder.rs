//! Structural token decoding.
//!
//! Handles splitting a raw JWT string into its three parts (header,
//! payload, signature), base64url-decoding each segment, and parsing
//! the header and payload as JSON values. No cryptographic checks
//! happen here; the verifier builds on top of this.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::Value;

use crate::error::JwtMintError;

/// The decoded header and payload of a JWT.
///
/// Implements a custom `Debug` that redacts `payload` to prevent
/// accidental leakage of sensitive claim data. The signature segment
/// is not carried here; checking it is the verification primitive's
/// job.
pub struct DecodedToken {
    /// The parsed JWT header (typically contains `alg` and `typ`).
    pub header: Value,
    /// The parsed JWT payload (claims).
    pub payload: Value,
}

/// Custom `Debug` that redacts the payload to prevent accidental
/// leakage through debug formatting or error chains.
impl fmt::Debug for DecodedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedToken")
            .field("header", &self.header)
            .field("payload", &"[REDACTED]")
            .finish()
    }
}

/// Decode a raw JWT string into its header and payload.
///
/// Splits the token on `.` separators, requires exactly three
/// segments, then base64url-decodes the header and payload segments
/// and parses them as JSON.
///
/// # Errors
///
/// Returns an error if the token doesn't have exactly three parts,
/// if base64url decoding fails, or if JSON parsing fails.
pub fn decode_token(token: &str) -> Result<DecodedToken, JwtMintError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(JwtMintError::InvalidTokenFormat);
    }

    let header = decode_segment(parts[0], "header")?;
    let payload = decode_segment(parts[1], "payload")?;

    Ok(DecodedToken { header, payload })
}

/// Base64url-decode a segment and parse it as JSON.
fn decode_segment(encoded: &str, segment_name: &str) -> Result<Value, JwtMintError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(encoded)
        .map_err(|_| JwtMintError::Base64DecodeError {
            segment: segment_name.to_string(),
        })?;

    serde_json::from_slice(&bytes).map_err(|e| JwtMintError::JsonParseError {
        segment: segment_name.to_string(),
        reason: e.to_string(),
    })
}

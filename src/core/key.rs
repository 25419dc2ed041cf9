//! HMAC key derivation from a shared secret string.
//!
//! The key is the raw UTF-8 bytes of the secret — no hashing or
//! stretching is applied, so tokens stay interoperable with any
//! standard JWT library fed the same secret string.

use zeroize::Zeroizing;

/// Derive raw HMAC key bytes from a secret string.
///
/// The returned buffer is wrapped in [`Zeroizing`] so the key material
/// is wiped from memory when dropped. Callers must reject empty secrets
/// before signing or verifying; an empty input here yields an empty key.
pub fn derive_key(secret: &str) -> Zeroizing<Vec<u8>> {
    Zeroizing::new(secret.as_bytes().to_vec())
}

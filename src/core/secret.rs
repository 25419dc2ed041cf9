//! Random secret generation.
//!
//! Produces hex-encoded secrets from the operating system's CSPRNG.
//! The output may be used directly as an HMAC signing secret, so a
//! general-purpose PRNG is not acceptable here.

use rand::RngCore;
use rand::rngs::OsRng;

/// Default secret length in bytes (64 hex characters).
pub const DEFAULT_SECRET_BYTES: usize = 32;

/// Largest secret length in bytes the CLI will generate.
///
/// HMAC-SHA256 keys gain nothing beyond the hash block size; the cap
/// mostly guards against fat-fingered `--bytes` values allocating
/// huge buffers.
pub const MAX_SECRET_BYTES: usize = 1024;

/// Generate `byte_length` random bytes and return them as lowercase hex.
///
/// The returned string is twice `byte_length` characters long.
pub fn generate_secret(byte_length: usize) -> String {
    let mut bytes = vec![0u8; byte_length];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_secret_default_length() {
        let secret = generate_secret(DEFAULT_SECRET_BYTES);
        assert_eq!(secret.len(), 64);
    }

    #[test]
    fn test_generate_secret_is_lowercase_hex() {
        let secret = generate_secret(32);
        assert!(secret.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(!secret.chars().any(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_generate_secret_custom_length() {
        assert_eq!(generate_secret(16).len(), 32);
        assert_eq!(generate_secret(1).len(), 2);
    }

    #[test]
    fn test_generate_secret_zero_length() {
        assert_eq!(generate_secret(0), "");
    }

    #[test]
    fn test_successive_secrets_differ() {
        // 32 random bytes colliding would indicate a broken RNG
        assert_ne!(generate_secret(32), generate_secret(32));
    }
}

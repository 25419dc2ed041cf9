//! Shared test fixtures and helper utilities.
//!
//! Provides pre-built tokens and token-construction helpers with known
//! claims for use in integration tests.
#![allow(dead_code)]

/// HMAC secret used to sign test tokens.
pub const TEST_SECRET: &str = "sekret123";

/// A different secret, for wrong-secret tests.
pub const OTHER_SECRET: &str = "wrong-secret";

/// A malformed token with only two parts (missing signature).
pub const MALFORMED_TOKEN_TWO_PARTS: &str = "eyJhbGciOiJIUzI1NiJ9.eyJsb2dpbiI6ImFsaWNlIn0";

/// A completely invalid token string.
pub const INVALID_TOKEN: &str = "not-a-valid-jwt";

/// Create an HS256-signed token with the given claims.
pub fn create_hs256_token(secret: &str, claims: &serde_json::Value) -> String {
    use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret.as_bytes());
    encode(&header, claims, &key).unwrap()
}

/// Standard claims matching what `encode` would mint, with a far-future exp.
pub fn standard_claims() -> serde_json::Value {
    serde_json::json!({
        "login": "alice",
        "password": "p@ss",
        "message": "hi",
        "exp": 4_102_444_800u64
    })
}

/// Create a token whose `exp` is one hour in the past.
pub fn create_expired_token(secret: &str) -> String {
    let past = chrono::Utc::now().timestamp() - 3600;
    create_hs256_token(
        secret,
        &serde_json::json!({
            "login": "alice",
            "password": "p@ss",
            "message": "hi",
            "exp": past
        }),
    )
}

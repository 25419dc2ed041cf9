//! Token expiry status rendering.
//!
//! Renders a human-readable status line from a verified payload's
//! `exp` claim. Tokens reaching this point have already passed expiry
//! validation, so the line only reports when the token will expire.

use chrono::DateTime;
use serde_json::Value;

/// Describe when a verified token expires.
///
/// Returns `None` when the payload carries no usable `exp` claim.
pub fn expiry_status(payload: &Value, now: i64) -> Option<String> {
    let exp = payload.get("exp")?.as_i64()?;
    let when = DateTime::from_timestamp(exp, 0)?;

    Some(format!(
        "valid, expires {} (in {})",
        when.format("%Y-%m-%d %H:%M:%S UTC"),
        format_remaining(exp - now)
    ))
}

/// Format a remaining duration in seconds as a short human string.
fn format_remaining(secs: i64) -> String {
    let secs = secs.max(0);
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m")
    } else {
        format!("{secs}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_status_reports_remaining_time() {
        let now = 1_700_000_000;
        let payload = serde_json::json!({"exp": now + 86_400});
        let status = expiry_status(&payload, now).unwrap();

        assert!(status.starts_with("valid, expires "));
        assert!(status.contains("in 24h 0m"));
    }

    #[test]
    fn test_expiry_status_minutes_only() {
        let now = 1_700_000_000;
        let payload = serde_json::json!({"exp": now + 300});
        let status = expiry_status(&payload, now).unwrap();
        assert!(status.contains("in 5m"));
    }

    #[test]
    fn test_expiry_status_missing_exp_is_none() {
        let payload = serde_json::json!({"login": "alice"});
        assert!(expiry_status(&payload, 0).is_none());
    }

    #[test]
    fn test_expiry_status_non_numeric_exp_is_none() {
        let payload = serde_json::json!({"exp": "soon"});
        assert!(expiry_status(&payload, 0).is_none());
    }

    #[test]
    fn test_format_remaining_clamps_negative() {
        assert_eq!(format_remaining(-5), "0s");
    }
}

//! JSON pretty-printing for terminal output.

use serde_json::Value;

/// Render a JSON value with 2-space indentation.
///
/// Falls back to compact rendering if pretty serialization fails,
/// which cannot happen for values parsed from JSON.
pub fn render_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

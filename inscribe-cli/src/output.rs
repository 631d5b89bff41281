use serde_json::Value;

/// Render a JSON value for display (two-space indent).
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

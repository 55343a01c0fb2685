//! JSON output formatting.

/// Format a payload as compact JSON.
pub fn format_json(value: &serde_json::Value) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

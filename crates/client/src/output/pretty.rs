//! Pretty output formatting.
//!
//! API payloads are opaque JSON values, so pretty rendering is
//! best-effort: listings get an `id  name` line per item, anything else
//! falls back to indented JSON.

use serde_json::Value;

/// Render a payload for terminal display.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Array(items) => format_listing(items),
        _ => serde_json::to_string_pretty(value).unwrap_or_default(),
    }
}

fn format_listing(items: &[Value]) -> String {
    if items.is_empty() {
        return "No results.".to_string();
    }
    let mut output = format!("RESULTS ({})\n", items.len());
    output.push_str(&"-".repeat(40));
    for item in items {
        output.push('\n');
        output.push_str(&format_item(item));
    }
    output
}

fn format_item(item: &Value) -> String {
    let Some(map) = item.as_object() else {
        return item.to_string();
    };
    let name = map
        .get("name")
        .or_else(|| map.get("title"))
        .and_then(Value::as_str);
    match (map.get("id"), name) {
        (Some(id), Some(name)) => format!("{id}  {name}"),
        (Some(id), None) => format!("{id}  {}", Value::Object(map.clone())),
        _ => Value::Object(map.clone()).to_string(),
    }
}

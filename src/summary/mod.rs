use serde_json::Value;

pub mod object;
pub mod room;

pub use object::summarize_object;
pub use room::summarize_room;

/// Renders a leaf value for a report line. Strings lose their quotes and
/// booleans are capitalized, matching the style of the IDE's own output.
fn fmt_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

/// Looks up a field, falling back to a pre-rendered default when absent.
/// Missing fields are never an error anywhere in the summarizers.
fn field_or(doc: &Value, key: &str, default: &str) -> String {
    doc.get(key)
        .map(fmt_value)
        .unwrap_or_else(|| default.to_string())
}

/// Resolves the `name` of an asset reference (`{"name": ..., "path": ...}`).
/// Null, missing, or malformed references all yield the default.
fn ref_name(doc: &Value, key: &str, default: &str) -> String {
    doc.get(key)
        .and_then(|r| r.get("name"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| default.to_string())
}

use serde_json::Value;

/// Decoded gateway response: a key-ordered generic mapping.
///
/// JSON, XML, and form-encoded responses are all normalized into this shape.
/// Values are strings for flat payloads; XML/JSON nesting is preserved as
/// nested maps and sequences.
pub type ResponsePayload = serde_json::Map<String, Value>;

/// Best-effort string view of a payload field.
///
/// The gateway is loose about types (`code` arrives as a string or a number
/// depending on the format), so scalars are stringified and anything else is
/// rendered as compact JSON. Absent and `null` fields are `None`.
pub fn field_as_string(payload: &ResponsePayload, key: &str) -> Option<String> {
    match payload.get(key)? {
        Value::Null => None,
        Value::String(value) => Some(value.clone()),
        other => Some(other.to_string()),
    }
}

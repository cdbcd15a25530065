//! String redaction over JSON values.
//!
//! Every string that is the direct value of an object entry is replaced with
//! [`REDACTED`](crate::constants::output::REDACTED), following nested objects
//! down from the root. Arrays are left exactly as they are, including any
//! objects or strings inside them.

use serde_json::{Map, Value};

use crate::constants::output::REDACTED;

/// Redact string values reachable from `value` through object entries.
///
/// Non-object values are returned unchanged.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use api_design_util::redact::redact;
///
/// let value = redact(json!({"name": "alice", "age": 30, "tags": ["a"]}));
/// assert_eq!(value, json!({"name": "STRING", "age": 30, "tags": ["a"]}));
/// ```
pub fn redact(mut value: Value) -> Value {
    redact_in_place(&mut value);
    value
}

/// In-place form of [`redact`].
pub fn redact_in_place(value: &mut Value) {
    if let Value::Object(map) = value {
        redact_object(map);
    }
}

fn redact_object(map: &mut Map<String, Value>) {
    for entry in map.values_mut() {
        match entry {
            Value::String(s) => *s = REDACTED.to_string(),
            Value::Object(nested) => redact_object(nested),
            // Arrays are not descended into.
            Value::Array(_) | Value::Number(_) | Value::Bool(_) | Value::Null => {}
        }
    }
}

use crate::domain::model::Record;
use serde_json::Value;

/// Field names of `record` in insertion order.
pub fn keys_of(record: &Record) -> Vec<String> {
    record.keys().cloned().collect()
}

/// Keys of an arbitrary JSON value.
///
/// Objects yield their field names, arrays their indices, strings one index
/// per character. Anything else has no keys.
pub fn keys_of_value(value: &Value) -> Vec<String> {
    match value {
        Value::Object(record) => keys_of(record),
        Value::Array(items) => (0..items.len()).map(|i| i.to_string()).collect(),
        Value::String(text) => (0..text.chars().count()).map(|i| i.to_string()).collect(),
        Value::Null | Value::Bool(_) | Value::Number(_) => Vec::new(),
    }
}

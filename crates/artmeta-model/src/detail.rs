//! Flat key/value export of a raw record for detail display.

use serde_json::Value;

use crate::record::RawRecord;

/// List the raw record's fields in source order, omitting nulls and empty
/// strings. Scalar values render as plain text, nested values as compact
/// JSON.
#[must_use]
pub fn detail_entries(raw: &RawRecord) -> Vec<(String, String)> {
    raw.iter()
        .filter_map(|(key, value)| {
            display_value(value).map(|text| (key.clone(), text))
        })
        .collect()
}

fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        other => Some(other.to_string()),
    }
}

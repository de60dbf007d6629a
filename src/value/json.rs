//! JSON text conversion for tree values.
//!
//! Values convert to and from JSON by way of `serde_json::Value`, which keeps
//! the crate's tree model independent of the wire format while reusing
//! serde_json's parser and writer. Mapping insertion order survives both
//! directions (`indexmap` on our side, serde_json's `preserve_order` on the
//! other).

use super::node::{Number, Value};
use anyhow::{Context, Result};
use serde::ser::{Serialize, Serializer};
use serde_json::Value as SerdeValue;

/// Parses a JSON string into a `Value`.
///
/// # Example
///
/// ```
/// use dottree::value::json::from_json;
///
/// let value = from_json(r#"{"name": "Alice"}"#).unwrap();
/// assert!(value.is_object());
/// assert!(from_json("{not json").is_err());
/// ```
pub fn from_json(json_str: &str) -> Result<Value> {
    let parsed: SerdeValue = serde_json::from_str(json_str).context("failed to parse JSON")?;
    Ok(Value::from(parsed))
}

/// Encodes a `Value` as compact JSON text.
pub fn to_json(value: &Value) -> Result<String> {
    serde_json::to_string(value).context("failed to encode JSON")
}

/// Encodes a `Value` as pretty-printed JSON text.
pub fn to_json_pretty(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to encode JSON")
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(elements) => elements.serialize(serializer),
            Value::Object(entries) => entries.serialize(serializer),
        }
    }
}

impl std::fmt::Display for Value {
    /// Renders the value as compact JSON.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&text)
    }
}

impl From<SerdeValue> for Value {
    fn from(value: SerdeValue) -> Self {
        match value {
            SerdeValue::Null => Value::Null,
            SerdeValue::Bool(b) => Value::Bool(b),
            SerdeValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Number(Number::Integer(i))
                } else if let Some(f) = n.as_f64() {
                    Value::Number(Number::Float(f))
                } else {
                    Value::Null
                }
            }
            SerdeValue::String(s) => Value::String(s),
            SerdeValue::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            SerdeValue::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, item)| (key, Value::from(item)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for SerdeValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => SerdeValue::Null,
            Value::Bool(b) => SerdeValue::Bool(b),
            Value::Number(Number::Integer(i)) => SerdeValue::from(i),
            Value::Number(Number::Float(f)) => serde_json::Number::from_f64(f)
                .map(SerdeValue::Number)
                .unwrap_or(SerdeValue::Null),
            Value::String(s) => SerdeValue::String(s),
            Value::Array(elements) => {
                SerdeValue::Array(elements.into_iter().map(SerdeValue::from).collect())
            }
            Value::Object(entries) => SerdeValue::Object(
                entries
                    .into_iter()
                    .map(|(key, item)| (key, SerdeValue::from(item)))
                    .collect(),
            ),
        }
    }
}

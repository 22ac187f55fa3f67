//! Host value bridge — total conversion from [`XmlValue`] into the
//! caller-facing `serde_json::Value` representation.
//!
//! The bridge never fails. Variants with no exact JSON counterpart fall
//! back to a canonical textual form: a non-finite float becomes its display
//! string, and `Null` becomes the empty string. Object key order is
//! preserved (`serde_json` with `preserve_order`).

use crate::types::XmlValue;
use serde_json::{Map, Number, Value};

/// Convert a value tree into the host representation.
pub fn to_host_value(value: XmlValue) -> Value {
    match value {
        XmlValue::Null => Value::String(String::new()),
        XmlValue::Bool(b) => Value::Bool(b),
        XmlValue::Integer(n) => Value::Number(Number::from(n)),
        XmlValue::Float(f) => match Number::from_f64(f) {
            Some(n) => Value::Number(n),
            // NaN / infinities have no JSON number form; stringify.
            None => Value::String(f.to_string()),
        },
        XmlValue::String(s) => Value::String(s),
        XmlValue::Array(items) => Value::Array(items.into_iter().map(to_host_value).collect()),
        XmlValue::Object(entries) => {
            let mut map = Map::with_capacity(entries.len());
            for (key, value) in entries {
                map.insert(key, to_host_value(value));
            }
            Value::Object(map)
        }
    }
}

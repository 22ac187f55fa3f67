//! Normalization pass — impose the canonical array-wrapping shape.
//!
//! After normalization, every object's direct children are either arrays
//! or non-string/non-object scalars:
//!
//! - a `String` child is promoted into a one-element array;
//! - an `Object` child is normalized recursively, then promoted into a
//!   one-element array;
//! - an `Array` child stays an array, with object elements normalized in
//!   place and other elements untouched;
//! - `Integer`, `Float`, `Bool`, and `Null` children pass through as-is.
//!
//! Normalization is a fixpoint: re-running it on already-normalized
//! entries leaves them unchanged.

use crate::types::XmlValue;

/// Normalize the direct children of an object, recursing into nested
/// objects along the way.
pub fn normalize_object(entries: Vec<(String, XmlValue)>) -> Vec<(String, XmlValue)> {
    entries
        .into_iter()
        .map(|(key, value)| (key, normalize_entry(value)))
        .collect()
}

fn normalize_entry(value: XmlValue) -> XmlValue {
    match value {
        XmlValue::String(s) => XmlValue::Array(vec![XmlValue::String(s)]),
        XmlValue::Object(entries) => {
            XmlValue::Array(vec![XmlValue::Object(normalize_object(entries))])
        }
        XmlValue::Array(items) => {
            XmlValue::Array(items.into_iter().map(normalize_item).collect())
        }
        other => other,
    }
}

/// Array elements are not re-wrapped; only object elements are normalized.
fn normalize_item(item: XmlValue) -> XmlValue {
    match item {
        XmlValue::Object(entries) => XmlValue::Object(normalize_object(entries)),
        other => other,
    }
}

//! Cleaning pass — strip blank keys and blank/empty values from a parsed tree.
//!
//! Cleaning is recursive and order-preserving:
//!
//! - object entries with a blank key vanish, and each surviving value is
//!   cleaned in turn;
//! - string leaves are trimmed, and an entry whose trimmed string is empty
//!   vanishes;
//! - array items that are blank strings, or that clean down to an empty
//!   container, vanish; an array left empty makes the whole entry absent
//!   (never an empty array);
//! - objects themselves survive cleaning even when every entry was dropped;
//! - non-string scalars pass through unchanged.
//!
//! Cleaning is idempotent: re-cleaning an already-cleaned tree is a no-op.

use crate::types::XmlValue;

/// Clean a value. `None` means the value cleaned away entirely, and the
/// parent must treat the entry or item as absent.
pub fn clean_value(value: XmlValue) -> Option<XmlValue> {
    match value {
        XmlValue::Object(entries) => Some(XmlValue::Object(clean_entries(entries))),
        XmlValue::Array(items) => {
            let items: Vec<XmlValue> = items.into_iter().filter_map(clean_item).collect();
            if items.is_empty() {
                None
            } else {
                Some(XmlValue::Array(items))
            }
        }
        XmlValue::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(XmlValue::String(trimmed.to_string()))
            }
        }
        other => Some(other),
    }
}

/// Clean an object's entries: blank keys go first, then each remaining
/// value is cleaned and absent results drop the whole entry.
fn clean_entries(entries: Vec<(String, XmlValue)>) -> Vec<(String, XmlValue)> {
    entries
        .into_iter()
        .filter(|(key, _)| !key.trim().is_empty())
        .filter_map(|(key, value)| clean_value(value).map(|cleaned| (key, cleaned)))
        .collect()
}

/// Clean one array item. Unlike object entries, an item that cleans down
/// to an empty object is dropped rather than kept.
fn clean_item(item: XmlValue) -> Option<XmlValue> {
    match clean_value(item)? {
        XmlValue::Object(entries) if entries.is_empty() => None,
        kept => Some(kept),
    }
}

//! Root tag extraction and envelope construction.
//!
//! The envelope key comes from a *textual* scan of the raw input, not from
//! the parser's structural root name. The two agree for ordinary documents,
//! but the textual result always wins when they differ — this precedence is
//! canonical, if occasionally surprising (a document whose only start tag
//! is self-closing, like `<a/>`, has no whitespace or `>` immediately after
//! the name, so the scan falls back to `"root"`).

use crate::types::XmlValue;
use regex_lite::Regex;
use std::sync::OnceLock;

/// Extract the document's root tag name: the first `<` followed by one or
/// more word characters followed by whitespace or `>`. Returns `"root"`
/// when no such sequence exists. Total — never fails, even on inputs the
/// tree parser rejects.
pub fn extract_root_tag(xml: &str) -> String {
    static ROOT_TAG: OnceLock<Regex> = OnceLock::new();
    let pattern = ROOT_TAG.get_or_init(|| {
        Regex::new(r"<(\w+)(\s|>)").expect("root tag pattern is a valid regex")
    });
    pattern
        .captures(xml)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "root".to_string())
}

/// Wrap the cleaned document content under the extracted root tag. The
/// result is always a single-entry object; the normalizer then runs over
/// that entry like any other, so a string or object body ends up inside a
/// one-element array.
pub fn build_envelope(root_tag: String, content: XmlValue) -> XmlValue {
    XmlValue::Object(vec![(root_tag, content)])
}

//! The composed parse-and-normalize pipeline and its async entry point.
//!
//! Each invocation is stateless and independent: parse the raw text into a
//! value tree, extract the document content from under the structural root,
//! clean it, wrap it under the textually extracted root tag, normalize the
//! envelope, and bridge the result into `serde_json::Value`. A parse
//! failure aborts the whole pipeline — the later stages never see a
//! partial tree.

use crate::error::{Result, XmlError};
use crate::types::XmlValue;
use crate::{bridge, clean, envelope, normalize, parser};

/// Run the full pipeline synchronously on the calling thread.
pub fn parse_xml_blocking(xml: &str) -> Result<serde_json::Value> {
    let parsed = parser::parse_document(xml)?;
    let content = document_content(parsed);

    // A document body that cleans away entirely (blank-only text) leaves an
    // empty object under the root tag.
    let cleaned = clean::clean_value(content).unwrap_or_else(|| XmlValue::Object(Vec::new()));

    let wrapped = envelope::build_envelope(envelope::extract_root_tag(xml), cleaned);
    let normalized = match wrapped {
        XmlValue::Object(entries) => XmlValue::Object(normalize::normalize_object(entries)),
        other => other,
    };

    Ok(bridge::to_host_value(normalized))
}

/// Dispatch a parse onto a blocking worker thread and resolve with the
/// result exactly once. Must be awaited within a tokio runtime.
///
/// There is no cancellation: once submitted, the parse runs to completion
/// or failure. A panicked worker surfaces as [`XmlError::Worker`] rather
/// than a hung or doubly-resolved future.
pub async fn parse_xml(xml: String) -> Result<serde_json::Value> {
    match tokio::task::spawn_blocking(move || parse_xml_blocking(&xml)).await {
        Ok(result) => result,
        Err(join_error) => Err(XmlError::Worker(join_error.to_string())),
    }
}

/// Unwrap the parser's single-entry root object down to the root element's
/// content. The structural root name is discarded here; the envelope is
/// keyed by the textual scan instead.
fn document_content(parsed: XmlValue) -> XmlValue {
    match parsed {
        XmlValue::Object(mut entries) if entries.len() == 1 => match entries.pop() {
            Some((_, content)) => content,
            None => XmlValue::Object(Vec::new()),
        },
        other => other,
    }
}

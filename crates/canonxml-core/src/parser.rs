//! XML tree parser — pull events in, generic [`XmlValue`] tree out.
//!
//! The parser walks quick-xml's event stream with an explicit element stack
//! and produces a single-key object mapping the structural root name to the
//! root element's content, built by these rules:
//!
//! - an element with no attributes and no child elements maps to a `String`
//!   of its trimmed text (possibly empty);
//! - an element with attributes and/or child elements maps to an `Object`
//!   whose keys are the attribute names and child tag names, in document
//!   order; non-blank text inside such an element is kept under the
//!   reserved [`TEXT_KEY`];
//! - a key seen more than once under one parent — a repeated child tag, or
//!   an attribute colliding with a same-named child — collapses into an
//!   `Array` of the individual values in first-seen order;
//! - whitespace-only text between elements is dropped; comments,
//!   processing instructions, the XML declaration, and DOCTYPE are skipped;
//!   CDATA sections are treated as ordinary text.
//!
//! Leaf text always stays `String`: numeric- or boolean-looking content is
//! not coerced at this stage.

use crate::error::{Result, XmlError};
use crate::types::XmlValue;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Reserved key holding the text content of an element that also carries
/// attributes or child elements.
pub const TEXT_KEY: &str = "#text";

/// One element currently open on the parse stack.
struct Frame {
    name: String,
    entries: Vec<(String, XmlValue)>,
    text: String,
}

impl Frame {
    fn open(name: String) -> Self {
        Frame {
            name,
            entries: Vec::new(),
            text: String::new(),
        }
    }

    /// Fold a completed attribute or child value into this element,
    /// collapsing repeated keys into arrays in first-seen order.
    fn push_entry(&mut self, key: String, value: XmlValue) {
        if let Some((_, existing)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            match existing {
                XmlValue::Array(items) => items.push(value),
                other => {
                    let first = std::mem::replace(other, XmlValue::Array(Vec::new()));
                    if let XmlValue::Array(items) = other {
                        items.push(first);
                        items.push(value);
                    }
                }
            }
        } else {
            self.entries.push((key, value));
        }
    }

    /// Close the element into its `(tag name, mapped value)` pair.
    fn close(mut self) -> (String, XmlValue) {
        let name = std::mem::take(&mut self.name);
        let raw_text = std::mem::take(&mut self.text);
        let text = raw_text.trim();

        if self.entries.is_empty() {
            return (name, XmlValue::String(text.to_string()));
        }
        if !text.is_empty() {
            let text = text.to_string();
            self.push_entry(TEXT_KEY.to_string(), XmlValue::String(text));
        }
        (name, XmlValue::Object(self.entries))
    }
}

/// Parse a well-formed XML document into a single-key `Object` mapping the
/// structural root element name to the root's content value.
///
/// Fails with [`XmlError`] on malformed input — unbalanced or mismatched
/// tags, invalid character references, truncated input, a missing or
/// duplicated root element, or text outside the root. No partial tree is
/// ever returned.
pub fn parse_document(xml: &str) -> Result<XmlValue> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().check_end_names = true;

    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Option<(String, XmlValue)> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if root.is_some() && stack.is_empty() {
                    return Err(malformed(&reader, "unexpected second root element"));
                }
                let mut frame = Frame::open(tag_name(&e));
                fold_attributes(&e, &mut frame)?;
                stack.push(frame);
            }
            Event::Empty(e) => {
                if root.is_some() && stack.is_empty() {
                    return Err(malformed(&reader, "unexpected second root element"));
                }
                let mut frame = Frame::open(tag_name(&e));
                fold_attributes(&e, &mut frame)?;
                close_frame(frame, &mut stack, &mut root);
            }
            Event::End(_) => {
                // check_end_names guarantees the tag matches the open frame,
                // but a stray close tag can still arrive with an empty stack.
                let frame = match stack.pop() {
                    Some(frame) => frame,
                    None => {
                        return Err(malformed(&reader, "close tag without a matching open tag"))
                    }
                };
                close_frame(frame, &mut stack, &mut root);
            }
            Event::Text(e) => {
                let text = e.unescape()?;
                append_text(&text, &mut stack, &reader)?;
            }
            Event::CData(e) => {
                let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                append_text(&text, &mut stack, &reader)?;
            }
            Event::Eof => break,
            // Declarations, comments, PIs, and DOCTYPE carry no content.
            _ => {}
        }
    }

    if let Some(frame) = stack.last() {
        return Err(malformed(
            &reader,
            &format!("unexpected end of input inside <{}>", frame.name),
        ));
    }

    match root {
        Some((name, value)) => Ok(XmlValue::Object(vec![(name, value)])),
        None => Err(malformed(&reader, "no root element found")),
    }
}

/// Accumulate text into the innermost open element. Whitespace outside the
/// root is ignored; anything else out there is a structural error.
fn append_text(text: &str, stack: &mut [Frame], reader: &Reader<&[u8]>) -> Result<()> {
    match stack.last_mut() {
        Some(frame) => {
            frame.text.push_str(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(malformed(reader, "text content outside the root element")),
    }
}

fn close_frame(frame: Frame, stack: &mut Vec<Frame>, root: &mut Option<(String, XmlValue)>) {
    let (name, value) = frame.close();
    match stack.last_mut() {
        Some(parent) => parent.push_entry(name, value),
        None => *root = Some((name, value)),
    }
}

fn tag_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

/// Fold each attribute in as an ordinary string-valued entry.
fn fold_attributes(e: &BytesStart<'_>, frame: &mut Frame) -> Result<()> {
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        frame.push_entry(key, XmlValue::String(value));
    }
    Ok(())
}

fn malformed(reader: &Reader<&[u8]>, message: &str) -> XmlError {
    XmlError::Malformed {
        message: format!("{message} (at byte {})", reader.buffer_position()),
    }
}

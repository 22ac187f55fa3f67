//! Error types for the parse-and-normalize pipeline.

use thiserror::Error;

/// Stable machine-readable code carried by every parse failure, for callers
/// that key error handling on a code rather than on the message text.
pub const ERROR_CODE: &str = "XML_PARSE_ERROR";

/// Errors that can occur while parsing an XML document.
///
/// Cleaning, normalization, and bridging are total functions over a
/// successfully parsed tree, so parsing is the only stage that can fail.
#[derive(Error, Debug)]
pub enum XmlError {
    /// The underlying XML reader rejected the input: bad syntax, a
    /// mismatched end tag, an invalid attribute, or a broken character
    /// reference.
    #[error("XML syntax error: {0}")]
    Syntax(#[from] quick_xml::Error),

    /// The events parsed individually but the document structure is
    /// unusable: truncated input, no root element, a second root element,
    /// or text outside the root.
    #[error("malformed XML document: {message}")]
    Malformed { message: String },

    /// The worker task carrying a parse failed before delivering a result.
    #[error("worker task failed: {0}")]
    Worker(String),
}

impl XmlError {
    /// The stable error code for this failure. All parse failures share
    /// [`ERROR_CODE`]; the variant only refines the human-readable message.
    pub fn code(&self) -> &'static str {
        ERROR_CODE
    }
}

/// Convenience alias used throughout canonxml-core.
pub type Result<T> = std::result::Result<T, XmlError>;

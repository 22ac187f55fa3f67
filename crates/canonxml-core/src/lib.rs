//! # canonxml-core
//!
//! Parse an XML document into a generic value tree, then normalize that
//! tree into a canonical JSON shape.
//!
//! The pipeline runs five stages over each input:
//!
//! 1. **Parse** — elements become ordered mappings, attributes fold in as
//!    ordinary keys, repeated tags collapse into arrays, text becomes
//!    string leaves.
//! 2. **Clean** — blank keys, blank strings, and arrays left empty are
//!    removed recursively.
//! 3. **Envelope** — the document content is wrapped under the root tag
//!    name, extracted *textually* from the raw input (`"root"` when no tag
//!    is found).
//! 4. **Normalize** — every string or object child of an object is
//!    promoted into a one-element array, so the result has a uniform,
//!    predictable shape.
//! 5. **Bridge** — the tree is converted into an insertion-ordered
//!    `serde_json::Value`.
//!
//! ## Quick start
//!
//! ```rust
//! use canonxml_core::parse_xml_blocking;
//! use serde_json::json;
//!
//! let value = parse_xml_blocking("<a><b>x</b></a>").unwrap();
//! assert_eq!(value, json!({"a": [{"b": ["x"]}]}));
//! ```
//!
//! The async entry point offloads the same pipeline to a blocking worker:
//!
//! ```rust
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let value = canonxml_core::parse_xml("<note><to>Ada</to></note>".into())
//!     .await
//!     .unwrap();
//! assert_eq!(value, serde_json::json!({"note": [{"to": ["Ada"]}]}));
//! # });
//! ```
//!
//! ## Modules
//!
//! - [`parser`] — XML text → [`XmlValue`] tree
//! - [`clean`] — blank stripping
//! - [`normalize`] — canonical array wrapping
//! - [`envelope`] — textual root-tag scan and envelope construction
//! - [`bridge`] — [`XmlValue`] → `serde_json::Value`
//! - [`pipeline`] — the composed stages and the async entry point
//! - [`error`] — error types for parse failures

pub mod bridge;
pub mod clean;
pub mod envelope;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod pipeline;
pub mod types;

pub use error::{Result, XmlError, ERROR_CODE};
pub use pipeline::{parse_xml, parse_xml_blocking};
pub use types::XmlValue;

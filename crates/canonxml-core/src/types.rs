//! The generic value tree threaded through the parse-and-normalize pipeline.

/// A parsed XML document value. Mirrors JSON types but separates integers
/// from floats (integer-ness of a scalar is preserved through the bridge)
/// and uses `Vec<(String, XmlValue)>` for objects to maintain first-seen
/// insertion order without depending on `IndexMap`.
///
/// The XML parser itself only ever produces `String`, `Array`, and `Object`
/// nodes — leaf text is never coerced into numbers or booleans. The
/// remaining variants exist so that the cleaning, normalization, and bridge
/// stages are total over programmatically built trees as well.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<XmlValue>),
    /// Key-value pairs in insertion order.
    Object(Vec<(String, XmlValue)>),
}

//! Property-based tests for the pipeline's stated guarantees.
//!
//! Uses `proptest` to generate random value trees and random small XML
//! documents, verifying:
//!
//! - cleaning is idempotent,
//! - normalization is a fixpoint,
//! - every successfully parsed document satisfies the canonical shape
//!   invariant (single-key top-level object; every nested object's direct
//!   children are arrays or non-string/non-object scalars).
//!
//! Float strategies avoid NaN so that tree equality stays meaningful.

use canonxml_core::clean::clean_value;
use canonxml_core::normalize::normalize_object;
use canonxml_core::{parse_xml_blocking, XmlValue};
use proptest::prelude::*;
use serde_json::Value;

// ============================================================================
// Strategies
// ============================================================================

/// Object keys, including blanks that the cleaner must drop.
fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_]{0,8}").unwrap(),
        1 => Just("  ".to_string()),
        1 => Just("".to_string()),
    ]
}

fn arb_leaf() -> impl Strategy<Value = XmlValue> {
    prop_oneof![
        Just(XmlValue::Null),
        any::<bool>().prop_map(XmlValue::Bool),
        (-1_000i64..1_000).prop_map(XmlValue::Integer),
        (-10_000i64..10_000, 1u32..4u32)
            .prop_map(|(mantissa, decimals)| XmlValue::Float(
                mantissa as f64 / 10f64.powi(decimals as i32)
            )),
        prop::string::string_regex("[ a-zA-Z0-9]{0,10}")
            .unwrap()
            .prop_map(XmlValue::String),
        // Blank strings exercise the absent-entry path.
        Just(XmlValue::String("   ".to_string())),
    ]
}

fn arb_value() -> impl Strategy<Value = XmlValue> {
    arb_leaf().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(XmlValue::Array),
            prop::collection::vec((arb_key(), inner), 0..4).prop_map(XmlValue::Object),
        ]
    })
}

/// A small XML document tree rendered to text for end-to-end parsing.
#[derive(Debug, Clone)]
enum Node {
    Text(String),
    Elem { tag: String, children: Vec<Node> },
}

fn arb_tag() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9]{0,5}").unwrap()
}

fn arb_node() -> impl Strategy<Value = Node> {
    let text = prop::string::string_regex("[ a-z0-9]{0,8}")
        .unwrap()
        .prop_map(Node::Text);
    text.prop_recursive(3, 24, 4, |inner| {
        (arb_tag(), prop::collection::vec(inner, 0..4))
            .prop_map(|(tag, children)| Node::Elem { tag, children })
    })
}

fn arb_document() -> impl Strategy<Value = Node> {
    (arb_tag(), prop::collection::vec(arb_node(), 0..4))
        .prop_map(|(tag, children)| Node::Elem { tag, children })
}

fn render(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(text),
        Node::Elem { tag, children } => {
            out.push('<');
            out.push_str(tag);
            out.push('>');
            for child in children {
                render(child, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}

// ============================================================================
// Shape invariant checker
// ============================================================================

fn assert_object_children(value: &Value) {
    match value {
        Value::Object(map) => {
            for child in map.values() {
                assert!(
                    matches!(child, Value::Array(_) | Value::Number(_) | Value::Bool(_)),
                    "object child must be array or non-string scalar, got {child:?}"
                );
                assert_object_children(child);
            }
        }
        Value::Array(items) => {
            for item in items {
                assert_object_children(item);
            }
        }
        _ => {}
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn cleaning_is_idempotent(value in arb_value()) {
        if let Some(cleaned) = clean_value(value) {
            prop_assert_eq!(clean_value(cleaned.clone()), Some(cleaned));
        }
    }

    #[test]
    fn normalization_is_a_fixpoint(value in arb_value()) {
        let entries = match value {
            XmlValue::Object(entries) => entries,
            other => vec![("k".to_string(), other)],
        };
        let once = normalize_object(entries);
        prop_assert_eq!(normalize_object(once.clone()), once);
    }

    #[test]
    fn parsed_documents_satisfy_the_shape_invariant(doc in arb_document()) {
        let mut xml = String::new();
        render(&doc, &mut xml);

        let value = parse_xml_blocking(&xml).expect("generated documents are well-formed");

        let top = value.as_object().expect("top level must be an object");
        prop_assert_eq!(top.len(), 1);
        for child in top.values() {
            assert_object_children(child);
        }
    }

    #[test]
    fn cleaning_never_leaves_blanks(value in arb_value()) {
        fn assert_no_blanks(value: &XmlValue) {
            match value {
                XmlValue::String(s) => assert!(!s.trim().is_empty()),
                XmlValue::Array(items) => {
                    assert!(!items.is_empty());
                    items.iter().for_each(assert_no_blanks);
                }
                XmlValue::Object(entries) => {
                    for (key, child) in entries {
                        assert!(!key.trim().is_empty());
                        assert_no_blanks(child);
                    }
                }
                _ => {}
            }
        }
        if let Some(cleaned) = clean_value(value) {
            assert_no_blanks(&cleaned);
        }
    }
}

//! JSON tree walker
//!
//! Converts a JSON value into an ordered statement sequence. The traversal
//! is pre-order depth-first over an explicit frame stack, so document
//! nesting depth never touches the call stack.

use super::infer::{classify, ValueKind};
use crate::triple::{Literal, NodeId, NodeType, Triple};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde_json::Value;
use tracing::warn;

/// Options for the forward encoding
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    base_prefix: String,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            base_prefix: "node".to_string(),
        }
    }
}

impl EncodeOptions {
    /// Create options with the default base prefix (`node`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base prefix for blank node identifiers
    #[must_use]
    pub fn with_base_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.base_prefix = prefix.into();
        self
    }

    /// The configured base prefix
    pub fn base_prefix(&self) -> &str {
        &self.base_prefix
    }
}

/// A pending node in the traversal
struct Frame<'a> {
    value: &'a Value,
    /// Identifier this node uses if it is a container
    node_id: NodeId,
    /// Percent-encoded key/index path from the root, underscore-joined;
    /// empty for the root itself
    path: String,
    /// Parent identifier and the predicate leading here; `None` only for
    /// the root frame
    parent: Option<(NodeId, String)>,
}

/// Encode a JSON value into an ordered triple sequence
///
/// Object keys are visited in source order and array indices ascending, so
/// identical input and prefix always produce an identical sequence. Node
/// identifiers are the base prefix plus the full path of percent-encoded
/// keys and array indices, underscore-joined; identical paths yield
/// identical identifiers across runs.
pub fn encode(value: &Value, options: &EncodeOptions) -> Vec<Triple> {
    let base = options.base_prefix();
    let root_id = NodeId::new(format!("{base}_root"));

    // The root is declared an Object before its kind is inspected; a root
    // array keeps this declaration and gets no second one.
    let mut triples = vec![Triple::node_type(root_id.clone(), NodeType::Object)];

    let mut stack = vec![Frame {
        value,
        node_id: root_id,
        path: String::new(),
        parent: None,
    }];

    while let Some(frame) = stack.pop() {
        match frame.value {
            Value::Object(map) => {
                if let Some((parent_id, predicate)) = &frame.parent {
                    triples.push(Triple::node_type(frame.node_id.clone(), NodeType::Object));
                    triples.push(Triple::link(
                        parent_id.clone(),
                        predicate.clone(),
                        frame.node_id.clone(),
                    ));
                }
                // Reversed so the stack pops children in source order.
                for (key, child) in map.iter().rev() {
                    stack.push(child_frame(child, &frame, key, base));
                }
            }
            Value::Array(items) => {
                if let Some((parent_id, predicate)) = &frame.parent {
                    triples.push(Triple::node_type(frame.node_id.clone(), NodeType::Array));
                    triples.push(Triple::link(
                        parent_id.clone(),
                        predicate.clone(),
                        frame.node_id.clone(),
                    ));
                }
                for (index, item) in items.iter().enumerate().rev() {
                    stack.push(child_frame(item, &frame, &index.to_string(), base));
                }
            }
            primitive => match frame.parent {
                Some((parent_id, predicate)) => {
                    triples.push(Triple::literal(
                        parent_id,
                        predicate,
                        encode_primitive(primitive),
                    ));
                }
                None => {
                    // A scalar root has no parent to attach to; only the
                    // root type statement is emitted.
                    warn!("root value is a scalar; emitting the root type statement only");
                }
            },
        }
    }

    triples
}

fn child_frame<'a>(child: &'a Value, parent: &Frame<'a>, segment: &str, base: &str) -> Frame<'a> {
    let encoded = utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string();
    let path = if parent.path.is_empty() {
        encoded
    } else {
        format!("{}_{}", parent.path, encoded)
    };
    Frame {
        value: child,
        node_id: NodeId::new(format!("{base}_{path}")),
        path,
        parent: Some((parent.node_id.clone(), segment.to_string())),
    }
}

fn encode_primitive(value: &Value) -> Literal {
    let kind = classify(value);
    if kind == ValueKind::Null {
        return Literal::null();
    }
    let rendered = match value {
        Value::String(s) => s.clone(),
        // Booleans render lowercase, numbers by their default conversion.
        other => other.to_string(),
    };
    match kind.annotation() {
        Some(datatype) => Literal::typed(rendered, datatype),
        None => Literal::string(rendered),
    }
}

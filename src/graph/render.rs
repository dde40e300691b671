//! GraphViz DOT rendering
//!
//! Emits one record-shaped node per registered RDF node (identifier,
//! declared type, property list) and one labeled edge per uid-valued
//! predicate, left-to-right.

use super::types::GraphSchema;
use std::fmt::Write as _;

/// Escape a value for embedding in a quoted DOT string
fn escape_dot(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out
}

/// Render the diagram description document
///
/// Nodes appear in registry insertion order; each node's property lines
/// are already sorted by `(predicate, datatype)`.
pub fn render_dot(schema: &GraphSchema) -> String {
    let mut out = String::new();
    out.push_str("digraph RDF_Schema {\n");
    out.push_str("  rankdir=LR;\n");
    out.push_str("  node [shape=record, style=filled, fillcolor=lightblue];\n");
    out.push_str("  edge [color=darkblue, fontcolor=darkblue];\n\n");

    for node in schema.nodes() {
        let id = escape_dot(&node.id.to_string());
        let mut label = format!("{{<f0> {id}|<f1> Type: {}", node.node_type);
        if !node.properties.is_empty() {
            label.push_str("|<f2> Properties:\\n");
            for (predicate, datatype) in &node.properties {
                let _ = write!(
                    label,
                    "{}: {}\\n",
                    escape_dot(predicate),
                    escape_dot(datatype)
                );
            }
        }
        label.push('}');
        let _ = writeln!(out, "  \"{id}\" [label=\"{label}\"];");
    }

    out.push('\n');

    for edge in &schema.edges {
        let _ = writeln!(
            out,
            "  \"{}\" -> \"{}\" [label=\"{}\"];",
            escape_dot(&edge.source.to_string()),
            escape_dot(&edge.target.to_string()),
            escape_dot(&edge.predicate)
        );
    }

    out.push_str("}\n");
    out
}

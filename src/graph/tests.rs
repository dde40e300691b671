//! Extraction and rendering tests

use super::*;
use crate::triple::{parse_triples, Datatype, Literal, NodeId, NodeType, Triple};
use pretty_assertions::assert_eq;

fn parsed(input: &str) -> Vec<Triple> {
    let report = parse_triples(input);
    assert!(report.skipped.is_empty(), "unexpected skipped lines");
    report.triples
}

#[test]
fn test_extract_registers_typed_subjects_in_order() {
    let triples = parsed(
        "_:b <dgraph.type> \"Array\" .\n\
         _:a <dgraph.type> \"Object\" .",
    );
    let schema = extract(&triples);
    assert_eq!(schema.len(), 2);
    assert_eq!(schema.nodes()[0].id, NodeId::new("b"));
    assert_eq!(schema.nodes()[0].node_type, NodeType::Array);
    assert_eq!(schema.nodes()[1].id, NodeId::new("a"));
    assert_eq!(schema.nodes()[1].node_type, NodeType::Object);
}

#[test]
fn test_extract_properties_and_edges() {
    let triples = parsed(
        "_:root <dgraph.type> \"Object\" .\n\
         _:child <dgraph.type> \"Object\" .\n\
         _:root <name> \"Alice\" .\n\
         _:root <age> \"30\"^^<xs:int> .\n\
         _:root <child> _:child .",
    );
    let schema = extract(&triples);

    let root = schema.get(&NodeId::new("root")).unwrap();
    let props: Vec<_> = root.properties.iter().cloned().collect();
    assert_eq!(
        props,
        vec![
            ("age".to_string(), "int".to_string()),
            ("name".to_string(), "string".to_string()),
        ]
    );

    assert_eq!(schema.edges.len(), 1);
    assert_eq!(schema.edges[0].source, NodeId::new("root"));
    assert_eq!(schema.edges[0].predicate, "child");
    assert_eq!(schema.edges[0].target, NodeId::new("child"));
}

#[test]
fn test_duplicate_property_observations_collapse() {
    let triples = vec![
        Triple::node_type(NodeId::new("n"), NodeType::Object),
        Triple::literal(NodeId::new("n"), "x", Literal::typed("1", Datatype::Int)),
        Triple::literal(NodeId::new("n"), "x", Literal::typed("2", Datatype::Int)),
    ];
    let schema = extract(&triples);
    assert_eq!(schema.get(&NodeId::new("n")).unwrap().properties.len(), 1);
}

#[test]
fn test_divergent_datatypes_kept_side_by_side() {
    let triples = vec![
        Triple::node_type(NodeId::new("n"), NodeType::Object),
        Triple::literal(NodeId::new("n"), "x", Literal::typed("1", Datatype::Int)),
        Triple::literal(NodeId::new("n"), "x", Literal::string("one")),
    ];
    let schema = extract(&triples);
    let props: Vec<_> = schema
        .get(&NodeId::new("n"))
        .unwrap()
        .properties
        .iter()
        .cloned()
        .collect();
    assert_eq!(
        props,
        vec![
            ("x".to_string(), "int".to_string()),
            ("x".to_string(), "string".to_string()),
        ]
    );
}

#[test]
fn test_untyped_subject_statements_are_reported() {
    let triples = parsed(
        "_:typed <dgraph.type> \"Object\" .\n\
         _:typed <ok> \"v\" .\n\
         _:stray <lost> \"v\" .",
    );
    let schema = extract(&triples);
    assert_eq!(schema.len(), 1);
    assert_eq!(schema.dropped.len(), 1);
    assert_eq!(schema.dropped[0].subject, NodeId::new("stray"));
}

#[test]
fn test_unknown_type_name_is_reported() {
    let triples = parsed("_:n <dgraph.type> \"Widget\" .\n_:n <x> \"v\" .");
    let schema = extract(&triples);
    assert!(schema.is_empty());
    // Both the declaration and the orphaned property end up dropped.
    assert_eq!(schema.dropped.len(), 2);
}

#[test]
fn test_property_before_type_statement_still_lands() {
    // Registration happens in a first pass, so text order does not matter.
    let triples = parsed("_:n <x> \"v\" .\n_:n <dgraph.type> \"Object\" .");
    let schema = extract(&triples);
    assert_eq!(schema.dropped.len(), 0);
    assert_eq!(schema.get(&NodeId::new("n")).unwrap().properties.len(), 1);
}

#[test]
fn test_repeated_type_declaration_overwrites_type_keeps_position() {
    let triples = parsed(
        "_:n <dgraph.type> \"Object\" .\n\
         _:m <dgraph.type> \"Object\" .\n\
         _:n <dgraph.type> \"Array\" .",
    );
    let schema = extract(&triples);
    assert_eq!(schema.len(), 2);
    assert_eq!(schema.nodes()[0].id, NodeId::new("n"));
    assert_eq!(schema.nodes()[0].node_type, NodeType::Array);
}

#[test]
fn test_render_dot_document() {
    let triples = parsed(
        "_:node_root <dgraph.type> \"Object\" .\n\
         _:node_root <name> \"Alice\" .\n\
         _:node_root <age> \"30\"^^<xs:int> .",
    );
    let dot = render_dot(&extract(&triples));
    assert_eq!(
        dot,
        "digraph RDF_Schema {\n\
         \x20 rankdir=LR;\n\
         \x20 node [shape=record, style=filled, fillcolor=lightblue];\n\
         \x20 edge [color=darkblue, fontcolor=darkblue];\n\
         \n\
         \x20 \"_:node_root\" [label=\"{<f0> _:node_root|<f1> Type: Object|<f2> Properties:\\nage: int\\nname: string\\n}\"];\n\
         \n\
         }\n"
    );
}

#[test]
fn test_render_dot_edges() {
    let triples = parsed(
        "_:a <dgraph.type> \"Object\" .\n\
         _:b <dgraph.type> \"Array\" .\n\
         _:a <items> _:b .",
    );
    let dot = render_dot(&extract(&triples));
    assert!(dot.contains("  \"_:a\" -> \"_:b\" [label=\"items\"];\n"));
}

#[test]
fn test_render_dot_node_without_properties_omits_section() {
    let triples = parsed("_:a <dgraph.type> \"Object\" .");
    let dot = render_dot(&extract(&triples));
    assert!(dot.contains("[label=\"{<f0> _:a|<f1> Type: Object}\"];"));
}

#[test]
fn test_render_dot_escapes_quotes_in_labels() {
    let triples = vec![
        Triple::node_type(NodeId::new("n"), NodeType::Object),
        Triple::literal(NodeId::new("n"), "say \"hi\"", Literal::string("v")),
    ];
    let dot = render_dot(&extract(&triples));
    assert!(dot.contains("say \\\"hi\\\": string"));
}

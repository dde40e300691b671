//! Schema extraction from parsed triples

use super::types::{Edge, GraphSchema};
use crate::triple::{NodeType, Term, Triple};

/// Build the node registry and edge list from a triple sequence
///
/// Two passes, in order: every `dgraph.type` subject is registered first,
/// in encounter order; every other statement then lands as an edge (node
/// object) or a property (literal object, datatype from the annotation or
/// `string`). Statements whose subject was never typed are kept on
/// `dropped` so the caller can surface them.
pub fn extract(triples: &[Triple]) -> GraphSchema {
    let mut schema = GraphSchema::new();

    for triple in triples {
        if !triple.is_type() {
            continue;
        }
        let declared = match &triple.object {
            Term::Literal(literal) => NodeType::parse(&literal.value),
            Term::Node(_) => None,
        };
        match declared {
            Some(node_type) => schema.register(triple.subject.clone(), node_type),
            None => schema.dropped.push(triple.clone()),
        }
    }

    for triple in triples {
        if triple.is_type() {
            continue;
        }
        if !schema.is_registered(&triple.subject) {
            schema.dropped.push(triple.clone());
            continue;
        }
        match &triple.object {
            Term::Node(target) => schema.edges.push(Edge {
                source: triple.subject.clone(),
                predicate: triple.predicate.clone(),
                target: target.clone(),
            }),
            Term::Literal(literal) => {
                let datatype = literal
                    .datatype
                    .map_or_else(|| "string".to_string(), |d| d.as_str().to_string());
                schema.add_property(&triple.subject, triple.predicate.clone(), datatype);
            }
        }
    }

    schema
}

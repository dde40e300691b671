//! DQL schema synthesis
//!
//! Aggregates a triple sequence into a predicate-to-tag-set summary and
//! renders it as DQL schema text.

use crate::triple::{Datatype, Term, Triple};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

/// Value-kind tag observed for a predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaTag {
    Uid,
    Int,
    Float,
    Bool,
    String,
}

impl SchemaTag {
    /// Tag name as it appears in schema text
    pub fn as_str(self) -> &'static str {
        match self {
            SchemaTag::Uid => "uid",
            SchemaTag::Int => "int",
            SchemaTag::Float => "float",
            SchemaTag::Bool => "bool",
            SchemaTag::String => "string",
        }
    }

    fn from_annotation(datatype: Option<Datatype>) -> Self {
        match datatype {
            Some(Datatype::Boolean) => SchemaTag::Bool,
            Some(Datatype::Int) => SchemaTag::Int,
            Some(Datatype::Float) => SchemaTag::Float,
            None => SchemaTag::String,
        }
    }
}

impl std::fmt::Display for SchemaTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Predicate-to-tag-set summary of a triple sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    predicates: BTreeMap<String, BTreeSet<SchemaTag>>,
}

impl Schema {
    /// Tags observed for a predicate
    pub fn tags(&self, predicate: &str) -> Option<&BTreeSet<SchemaTag>> {
        self.predicates.get(predicate)
    }

    /// Number of predicates in the schema
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Whether the schema is empty
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Iterate predicates in ascending name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<SchemaTag>)> {
        self.predicates.iter()
    }

    /// Render as DQL schema text
    ///
    /// One line per predicate, sorted ascending; multiple tags on a line
    /// surface an unresolved conflict rather than merging it away.
    pub fn to_dql(&self) -> String {
        let mut out = String::new();
        out.push_str("# DQL schema generated from RDF data\n");
        out.push_str("# Define types for each predicate\n");
        for (predicate, tags) in &self.predicates {
            let tag_list = tags
                .iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join(" | ");
            let _ = writeln!(out, "{predicate}: {tag_list} .");
        }
        out
    }
}

/// Aggregate a triple sequence into a predicate schema
///
/// The reserved `dgraph.type` predicate is excluded. Node-valued objects
/// record `uid`; literals record their annotation tag, defaulting to
/// `string` when unannotated.
pub fn synthesize(triples: &[Triple]) -> Schema {
    let mut predicates: BTreeMap<String, BTreeSet<SchemaTag>> = BTreeMap::new();
    for triple in triples {
        if triple.is_type() {
            continue;
        }
        let tag = match &triple.object {
            Term::Node(_) => SchemaTag::Uid,
            Term::Literal(literal) => SchemaTag::from_annotation(literal.datatype),
        };
        predicates
            .entry(triple.predicate.clone())
            .or_default()
            .insert(tag);
    }
    Schema { predicates }
}

//! Structured triple model and statement grammar
//!
//! # Overview
//!
//! A [`Triple`] is the atomic unit of the interchange format: a blank-node
//! subject, a predicate (raw JSON key or stringified array index), and
//! either another blank node or a [`Literal`] in object position. The
//! encoder and the reverse pipeline both work on this model; text only
//! appears at file boundaries, via the `Display` impls and [`parse_triples`].

mod format;
mod parser;
mod types;

pub use format::{escape_literal, unescape_literal};
pub use parser::{parse_triples, ParseReport, SkippedLine};
pub use types::{Datatype, Literal, NodeId, NodeType, Term, Triple, TYPE_PREDICATE};

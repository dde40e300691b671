//! # triplify
//!
//! Convert JSON documents into Dgraph-ready RDF triples, derive a DQL
//! schema from the statements, and render a GraphViz diagram of the
//! schema recovered from an RDF statement file.
//!
//! ## Pipelines
//!
//! ```text
//! forward:  JSON value --> encode --> [Triple] --> statement text
//!                                        |
//!                                        +--> synthesize --> DQL schema
//!
//! reverse:  statement text --> parse --> [Triple] --> extract --> render --> DOT
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use triplify::encode::{encode, EncodeOptions};
//! use triplify::schema::synthesize;
//!
//! let value = json!({"name": "Alice", "age": 30});
//! let triples = encode(&value, &EncodeOptions::new());
//! let schema = synthesize(&triples);
//! assert_eq!(schema.len(), 2);
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Shared triple model and statement grammar
pub mod triple;

/// Forward pipeline: JSON to triples
pub mod encode;

/// DQL schema synthesis
pub mod schema;

/// Reverse pipeline: triples to graph diagram
pub mod graph;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

pub use encode::{encode, EncodeOptions};
pub use graph::{extract, render_dot, GraphSchema};
pub use schema::{synthesize, Schema};
pub use triple::{parse_triples, ParseReport, Triple};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

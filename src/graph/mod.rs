//! Reverse pipeline: parsed triples to a graph diagram
//!
//! # Overview
//!
//! [`extract`] classifies a parsed triple sequence into a typed node
//! registry and an edge list; [`render_dot`] turns that into a GraphViz
//! DOT document. The re-parse is lossy by construction: only what the
//! statements declare survives.

mod extract;
mod render;
mod types;

pub use extract::extract;
pub use render::render_dot;
pub use types::{Edge, GraphSchema, NodeEntry};

#[cfg(test)]
mod tests;

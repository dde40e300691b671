//! DQL schema synthesis from triple sequences
//!
//! # Overview
//!
//! [`synthesize`] scans an in-memory triple sequence and aggregates every
//! non-reserved predicate into the set of value-kind tags observed for it.
//! Conflicting observations are preserved side by side, not resolved.

mod synth;

pub use synth::{synthesize, Schema, SchemaTag};

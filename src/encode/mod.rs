//! Forward pipeline: JSON values to triple statements
//!
//! # Overview
//!
//! [`encode`] walks a `serde_json::Value` tree depth-first and produces the
//! ordered triple sequence for it, assigning deterministic blank-node
//! identifiers along the way. [`classify`] is the datatype inferencer used
//! for primitive leaves.

mod infer;
mod walker;

pub use infer::{classify, ValueKind};
pub use walker::{encode, EncodeOptions};
